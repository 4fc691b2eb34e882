use hough_lines::image::Raster;

/// Blank 8-bit canvas, tightly packed.
pub fn blank_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![0u8; width * height]
}

/// Draws a one-pixel-wide segment between two inclusive endpoints (Bresenham).
pub fn draw_line_u8(
    img: &mut [u8],
    width: usize,
    from: (i64, i64),
    to: (i64, i64),
    value: u8,
) {
    let height = (img.len() / width) as i64;
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        if x >= 0 && y >= 0 && x < width as i64 && y < height {
            img[y as usize * width + x as usize] = value;
        }
        if (x, y) == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Full-width horizontal line at row `y`.
pub fn draw_horizontal_u8(img: &mut [u8], width: usize, y: usize) {
    draw_line_u8(img, width, (0, y as i64), (width as i64 - 1, y as i64), 255);
}

/// Full-height vertical line at column `x`.
pub fn draw_vertical_u8(img: &mut [u8], width: usize, x: usize) {
    let height = img.len() / width;
    let bottom = height as i64 - 1;
    draw_line_u8(img, width, (x as i64, 0), (x as i64, bottom), 255);
}

/// Binary raster (0.0 / 1.0) with the given margin from an 8-bit canvas.
pub fn raster_from_u8(img: &[u8], width: usize, margin: usize) -> Raster {
    let height = img.len() / width;
    Raster::from_fn(width, height, margin, |x, y| {
        if img[y * width + x] > 0 {
            1.0
        } else {
            0.0
        }
    })
    .expect("valid synthetic raster")
}
