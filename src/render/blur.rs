use crate::foundation::error::{ShotframeError, ShotframeResult};

/// Below this sigma the exact Q16 gaussian kernel is used; above it, three box passes.
const BOX_BLUR_MIN_SIGMA: f32 = 2.0;

/// Gaussian blur of a premultiplied RGBA8 buffer with standard deviation `sigma` (in pixels).
///
/// Small sigmas convolve with a quantized gaussian kernel of radius `ceil(3 * sigma)`. Larger
/// ones use the three-pass box approximation, whose cost does not depend on the radius. Edges
/// clamp to the nearest pixel.
pub fn gaussian_blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    sigma: f32,
) -> ShotframeResult<Vec<u8>> {
    check_len(src, width, height)?;
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(ShotframeError::validation("blur sigma must be finite and >= 0"));
    }
    if sigma == 0.0 || width == 0 || height == 0 {
        return Ok(src.to_vec());
    }
    if sigma < BOX_BLUR_MIN_SIGMA {
        let radius = (sigma * 3.0).ceil() as u32;
        return blur_rgba8_premul(src, width, height, radius, sigma);
    }

    let mut a = src.to_vec();
    let mut b = vec![0u8; a.len()];
    for size in boxes_for_gauss(sigma, 3) {
        let r = (size - 1) / 2;
        box_blur_horizontal(&a, &mut b, width, height, r);
        box_blur_vertical(&b, &mut a, width, height, r);
    }
    Ok(a)
}

/// Exact separable gaussian blur with an explicit kernel `radius`.
pub fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> ShotframeResult<Vec<u8>> {
    let expected_len = check_len(src, width, height)?;
    if radius == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    horizontal_pass(src, &mut tmp, width, height, &kernel);
    vertical_pass(&tmp, &mut out, width, height, &kernel);
    Ok(out)
}

fn check_len(src: &[u8], width: u32, height: u32) -> ShotframeResult<usize> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| ShotframeError::validation("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(ShotframeError::validation(
            "blur expects src matching width*height*4",
        ));
    }
    Ok(expected_len)
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> ShotframeResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ShotframeError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    let sigma = sigma as f64;
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = i as f64;
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    // Put the rounding remainder on the center tap so the kernel sums to exactly 1.0.
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let new_mid = (i64::from(weights[mid]) + delta).clamp(0, 65536);
        weights[mid] = new_mid as u32;
    }

    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                let idx = ((y * w + sx) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki as i32 - radius).clamp(0, h - 1);
                let idx = ((sy * w + x) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    (v.min(255)) as u8
}

/// Odd box widths whose `n` successive passes approximate a gaussian of `sigma`.
fn boxes_for_gauss(sigma: f32, n: u32) -> Vec<u32> {
    let sigma = f64::from(sigma);
    let nf = f64::from(n);
    let w_ideal = (12.0 * sigma * sigma / nf + 1.0).sqrt();
    let mut wl = w_ideal.floor() as i64;
    if wl % 2 == 0 {
        wl -= 1;
    }
    let wl = wl.max(1);
    let wu = wl + 2;
    let wlf = wl as f64;
    let m_ideal = (12.0 * sigma * sigma - nf * wlf * wlf - 4.0 * nf * wlf - 3.0 * nf) / (-4.0 * wlf - 4.0);
    let m = m_ideal.round().max(0.0) as u32;
    (0..n)
        .map(|i| if i < m { wl as u32 } else { wu as u32 })
        .collect()
}

fn box_blur_horizontal(src: &[u8], dst: &mut [u8], width: u32, height: u32, r: u32) {
    let w = width as i64;
    let r = i64::from(r);
    let d = (2 * r + 1) as u32;
    for y in 0..height as i64 {
        let row = (y * w) as usize * 4;
        let px = |x: i64, c: usize| u32::from(src[row + (x.clamp(0, w - 1) as usize) * 4 + c]);
        let mut sum = [0u32; 4];
        for c in 0..4 {
            for x in -r..=r {
                sum[c] += px(x, c);
            }
        }
        for x in 0..w {
            let out = row + (x as usize) * 4;
            for c in 0..4 {
                dst[out + c] = ((sum[c] + d / 2) / d) as u8;
                sum[c] = sum[c] + px(x + r + 1, c) - px(x - r, c);
            }
        }
    }
}

fn box_blur_vertical(src: &[u8], dst: &mut [u8], width: u32, height: u32, r: u32) {
    let w = width as usize;
    let h = height as i64;
    let r = i64::from(r);
    let d = (2 * r + 1) as u32;
    for x in 0..w {
        let px = |y: i64, c: usize| u32::from(src[((y.clamp(0, h - 1) as usize) * w + x) * 4 + c]);
        let mut sum = [0u32; 4];
        for c in 0..4 {
            for y in -r..=r {
                sum[c] += px(y, c);
            }
        }
        for y in 0..h {
            let out = ((y as usize) * w + x) * 4;
            for c in 0..4 {
                dst[out + c] = ((sum[c] + d / 2) / d) as u8;
                sum[c] = sum[c] + px(y + r + 1, c) - px(y - r, c);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
