use crate::error::EncoderError;
use crate::hierarchy::Plane;

/// A planar 4:2:0 picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePixels {
    pub y: Vec<u8>,
    pub u: Vec<u8>,
    pub v: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

fn invalid(msg: &str) -> EncoderError {
    EncoderError::InvalidY4m(msg.to_owned())
}

impl FramePixels {
    pub fn all_from_y4m(data: &[u8]) -> Result<Vec<Self>, EncoderError> {
        let header_end = data
            .iter()
            .position(|&b| b == b'\n')
            .ok_or_else(|| invalid("no header line"))?;
        let header_line =
            std::str::from_utf8(&data[..header_end]).map_err(|_| invalid("header is not UTF-8"))?;

        if !header_line.starts_with("YUV4MPEG2") {
            return Err(invalid("not a YUV4MPEG2 stream"));
        }

        let mut width = 0u32;
        let mut height = 0u32;

        for token in header_line.split_whitespace().skip(1) {
            let (key, val) = token.split_at(1);
            match key {
                "W" => width = val.parse().map_err(|_| invalid("bad width"))?,
                "H" => height = val.parse().map_err(|_| invalid("bad height"))?,
                "C" if !val.starts_with("420") => {
                    return Err(EncoderError::InvalidY4m(format!(
                        "colorspace {val} is not 4:2:0"
                    )));
                }
                _ => {}
            }
        }

        if width == 0 || height == 0 {
            return Err(invalid("missing W/H in header"));
        }

        let y_size = (width * height) as usize;
        let uv_size = (width.div_ceil(2) * height.div_ceil(2)) as usize;
        let frame_data_size = y_size + 2 * uv_size;

        let mut frames = Vec::new();
        let mut pos = header_end + 1;

        while pos < data.len() {
            // FRAME lines may carry parameters; skip to the end of the line.
            if !data[pos..].starts_with(b"FRAME") {
                return Err(invalid("expected FRAME marker"));
            }
            let line_end = data[pos..]
                .iter()
                .position(|&b| b == b'\n')
                .ok_or_else(|| invalid("unterminated FRAME line"))?;
            let pixel_start = pos + line_end + 1;
            if pixel_start + frame_data_size > data.len() {
                return Err(invalid("truncated frame data"));
            }

            let planes = &data[pixel_start..pixel_start + frame_data_size];
            frames.push(Self {
                y: planes[..y_size].to_vec(),
                u: planes[y_size..y_size + uv_size].to_vec(),
                v: planes[y_size + uv_size..].to_vec(),
                width,
                height,
            });

            pos = pixel_start + frame_data_size;
        }

        Ok(frames)
    }

    pub fn all_from_y4m_file(path: &std::path::Path) -> Result<Vec<Self>, EncoderError> {
        let data = std::fs::read(path)?;
        Self::all_from_y4m(&data)
    }

    pub fn from_y4m(data: &[u8]) -> Result<Self, EncoderError> {
        Self::all_from_y4m(data)?
            .into_iter()
            .next()
            .ok_or_else(|| invalid("no FRAME in stream"))
    }

    pub fn solid(width: u32, height: u32, y: u8, u: u8, v: u8) -> Self {
        let y_size = (width * height) as usize;
        let uv_size = (width.div_ceil(2) * height.div_ceil(2)) as usize;

        Self {
            y: vec![y; y_size],
            u: vec![u; uv_size],
            v: vec![v; uv_size],
            width,
            height,
        }
    }

    pub fn plane_width(&self, plane: Plane) -> usize {
        match plane {
            Plane::Y => self.width as usize,
            Plane::U | Plane::V => self.width.div_ceil(2) as usize,
        }
    }

    pub fn plane_height(&self, plane: Plane) -> usize {
        match plane {
            Plane::Y => self.height as usize,
            Plane::U | Plane::V => self.height.div_ceil(2) as usize,
        }
    }

    pub fn plane(&self, plane: Plane) -> &[u8] {
        match plane {
            Plane::Y => &self.y,
            Plane::U => &self.u,
            Plane::V => &self.v,
        }
    }

    pub fn plane_mut(&mut self, plane: Plane) -> &mut [u8] {
        match plane {
            Plane::Y => &mut self.y,
            Plane::U => &mut self.u,
            Plane::V => &mut self.v,
        }
    }

    /// Copies out the 8x8 block at block coordinates `(bx, by)`.
    pub fn block(&self, plane: Plane, bx: usize, by: usize) -> [u8; 64] {
        let stride = self.plane_width(plane);
        let data = self.plane(plane);
        let mut out = [0u8; 64];
        for (r, row) in out.chunks_exact_mut(8).enumerate() {
            let start = (by * 8 + r) * stride + bx * 8;
            row.copy_from_slice(&data[start..start + 8]);
        }
        out
    }

    pub fn put_block(&mut self, plane: Plane, bx: usize, by: usize, block: &[u8; 64]) {
        let stride = self.plane_width(plane);
        let data = self.plane_mut(plane);
        for (r, row) in block.chunks_exact(8).enumerate() {
            let start = (by * 8 + r) * stride + bx * 8;
            data[start..start + 8].copy_from_slice(row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_y4m(width: u32, height: u32, y_val: u8, u_val: u8, v_val: u8) -> Vec<u8> {
        create_multi_frame_y4m(width, height, &[(y_val, u_val, v_val)])
    }

    fn create_multi_frame_y4m(width: u32, height: u32, frame_values: &[(u8, u8, u8)]) -> Vec<u8> {
        let header = format!("YUV4MPEG2 W{} H{} F30:1 Ip C420jpeg\n", width, height);
        let mut data = header.into_bytes();
        let y_size = (width * height) as usize;
        let uv_size = (width.div_ceil(2) * height.div_ceil(2)) as usize;
        for &(y_val, u_val, v_val) in frame_values {
            data.extend_from_slice(b"FRAME\n");
            data.extend(vec![y_val; y_size]);
            data.extend(vec![u_val; uv_size]);
            data.extend(vec![v_val; uv_size]);
        }
        data
    }

    #[test]
    fn parse_solid_y4m() {
        let y4m = create_test_y4m(64, 64, 128, 128, 128);
        let pixels = FramePixels::from_y4m(&y4m).unwrap();
        assert_eq!(pixels.width, 64);
        assert_eq!(pixels.height, 64);
        assert_eq!(pixels.y.len(), 64 * 64);
        assert_eq!(pixels.u.len(), 32 * 32);
        assert!(pixels.y.iter().all(|&p| p == 128));
    }

    #[test]
    fn parse_y4m_no_colorspace() {
        let mut data = b"YUV4MPEG2 W16 H16 F25:1\n".to_vec();
        data.extend_from_slice(b"FRAME\n");
        data.extend(vec![200u8; 16 * 16]);
        data.extend(vec![100u8; 8 * 8]);
        data.extend(vec![50u8; 8 * 8]);

        let pixels = FramePixels::from_y4m(&data).unwrap();
        assert!(pixels.y.iter().all(|&p| p == 200));
        assert!(pixels.u.iter().all(|&p| p == 100));
        assert!(pixels.v.iter().all(|&p| p == 50));
    }

    #[test]
    fn frame_line_parameters_are_skipped() {
        let mut data = b"YUV4MPEG2 W16 H16 F25:1\n".to_vec();
        data.extend_from_slice(b"FRAME Ixyz\n");
        data.extend(vec![7u8; 16 * 16 + 2 * 64]);
        let frames = FramePixels::all_from_y4m(&data).unwrap();
        assert_eq!(frames.len(), 1);
        assert!(frames[0].v.iter().all(|&p| p == 7));
    }

    #[test]
    fn parse_multi_frame_y4m() {
        let y4m =
            create_multi_frame_y4m(16, 16, &[(100, 110, 120), (130, 140, 150), (200, 210, 220)]);
        let frames = FramePixels::all_from_y4m(&y4m).unwrap();
        assert_eq!(frames.len(), 3);
        assert!(frames[1].u.iter().all(|&p| p == 140));
        assert!(frames[2].v.iter().all(|&p| p == 220));
    }

    #[test]
    fn rejects_422() {
        let data = b"YUV4MPEG2 W16 H16 C422\nFRAME\n".to_vec();
        assert!(matches!(
            FramePixels::all_from_y4m(&data),
            Err(EncoderError::InvalidY4m(_))
        ));
    }

    #[test]
    fn rejects_truncated_frame() {
        let mut data = create_test_y4m(16, 16, 1, 2, 3);
        data.truncate(data.len() - 1);
        assert!(FramePixels::all_from_y4m(&data).is_err());
    }

    #[test]
    fn rejects_missing_magic() {
        assert!(FramePixels::all_from_y4m(b"RIFF W16 H16\n").is_err());
    }

    #[test]
    fn solid_constructor_matches_y4m() {
        let y4m = create_test_y4m(64, 64, 81, 91, 81);
        let from_y4m = FramePixels::from_y4m(&y4m).unwrap();
        assert_eq!(from_y4m, FramePixels::solid(64, 64, 81, 91, 81));
    }

    #[test]
    fn block_round_trip() {
        let mut pixels = FramePixels::solid(32, 32, 0, 0, 0);
        let mut block = [0u8; 64];
        for (i, p) in block.iter_mut().enumerate() {
            *p = i as u8;
        }
        pixels.put_block(Plane::Y, 1, 2, &block);
        assert_eq!(pixels.block(Plane::Y, 1, 2), block);
        assert_eq!(pixels.y[16 * 32 + 8], 0);
        assert_eq!(pixels.y[16 * 32 + 9], 1);
        assert_eq!(pixels.block(Plane::Y, 0, 0), [0u8; 64]);
    }
}
