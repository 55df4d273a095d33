//! Nearest-neighbor integer upscaling.

use super::image::{Image, Pixel};

impl Image {
    /// Produce a new image scaled up by the integer `factor`.
    ///
    /// Every source pixel becomes a `factor x factor` block in the result:
    /// `dest[r*factor+i][c*factor+j] == src[r][c]` for all `i, j` below
    /// `factor`. A factor of 1 yields a content-identical copy. Panics if
    /// `factor` is 0.
    pub fn scale(&self, factor: u32) -> Image {
        assert!(factor >= 1, "scale factor must be at least 1");
        let new_width = self.width() * factor;
        let new_height = self.height() * factor;
        let mut pixels = vec![Pixel::default(); new_width as usize * new_height as usize];

        for column in 0..self.width() {
            copy_column(self, &mut pixels, new_width, column, factor);
        }

        Image::from_pixels(new_width, new_height, pixels)
    }
}

/// Replicate one source column into its `factor` destination columns.
fn copy_column(source: &Image, dest: &mut [Pixel], dest_width: u32, column: u32, factor: u32) {
    let first_dest_column = (column * factor) as usize;
    for i in 0..factor as usize {
        for row in 0..source.height() {
            let pixel = source.pixel(row, column);
            for j in 0..factor {
                let dest_row = (row * factor + j) as usize;
                dest[dest_row * dest_width as usize + first_dest_column + i] = pixel;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Image {
        let pixels = (0..height)
            .flat_map(|row| {
                (0..width).map(move |col| {
                    Pixel::new((row * 16 + col) as u8, (col * 3) as u8, (row * 7) as u8)
                })
            })
            .collect();
        Image::from_pixels(width, height, pixels)
    }

    #[test]
    fn scale_one_is_identity() {
        let img = gradient(5, 3);
        let scaled = img.scale(1);
        assert_eq!(scaled, img);
    }

    #[test]
    fn scale_replicates_blocks() {
        let img = gradient(3, 2);
        let factor = 3;
        let scaled = img.scale(factor);

        assert_eq!(scaled.width(), img.width() * factor);
        assert_eq!(scaled.height(), img.height() * factor);

        for row in 0..img.height() {
            for col in 0..img.width() {
                for i in 0..factor {
                    for j in 0..factor {
                        assert_eq!(
                            scaled.pixel(row * factor + i, col * factor + j),
                            img.pixel(row, col),
                            "block ({row},{col}) offset ({i},{j})"
                        );
                    }
                }
            }
        }
    }
}
