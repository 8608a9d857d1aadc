// Plain-text outline files: one vertex per line, `x y` or `x,y`.
// Blank lines and lines starting with `#` are skipped.

pub mod outline_io {
    use crate::core_modules::point::Point;
    use std::fmt;
    use std::fs;
    use std::io::{self, Write};
    use std::path::Path;

    #[derive(Debug)]
    pub enum OutlineIoError {
        Io(io::Error),
        /// A line that is not a pair of numbers. `line` is 1-based.
        Parse { line: usize, content: String },
    }

    impl fmt::Display for OutlineIoError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Io(e) => write!(f, "outline file error: {}", e),
                Self::Parse { line, content } => {
                    write!(f, "line {}: expected two coordinates, got '{}'", line, content)
                }
            }
        }
    }

    impl std::error::Error for OutlineIoError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                Self::Io(e) => Some(e),
                Self::Parse { .. } => None,
            }
        }
    }

    impl From<io::Error> for OutlineIoError {
        fn from(e: io::Error) -> Self {
            Self::Io(e)
        }
    }

    pub fn parse(text: &str) -> Result<Vec<Point>, OutlineIoError> {
        let mut points = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let bad_line = || OutlineIoError::Parse {
                line: index + 1,
                content: line.to_string(),
            };
            let mut fields = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|f| !f.is_empty());

            let x = fields.next().and_then(|f| f.parse::<f64>().ok());
            let y = fields.next().and_then(|f| f.parse::<f64>().ok());
            match (x, y, fields.next()) {
                (Some(x), Some(y), None) => points.push(Point { x, y }),
                _ => return Err(bad_line()),
            }
        }

        Ok(points)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Vec<Point>, OutlineIoError> {
        let text = fs::read_to_string(path)?;
        parse(&text)
    }

    pub fn save(path: impl AsRef<Path>, points: &[Point]) -> Result<(), OutlineIoError> {
        let mut output = io::BufWriter::new(fs::File::create(path)?);
        for point in points {
            writeln!(output, "{} {}", point.x, point.y)?;
        }
        output.flush()?;
        Ok(())
    }
}
