use std::fmt;

use crate::ops::similarity::SyncMatch;

/// What went into one output frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub frame: i64,
    /// Number of frames in the pixel stack.
    pub depth: usize,
    /// Set for synchronized compositors only.
    pub sync_radius: Option<u32>,
    /// Offset and score of clips 1.. against clip 0.
    pub matches: Vec<SyncMatch>,
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FRAME: {}", self.frame)?;
        writeln!(f, "CLIPS: {}", self.depth)?;

        if let Some(radius) = self.sync_radius {
            writeln!(f, "SYNC RADIUS: {}", radius)?;
            writeln!(f, "SYNC METRICS:")?;
            for (index, found) in self.matches.iter().enumerate() {
                // Clip numbers are 1-based and clip 1 is the reference
                writeln!(f, "{:<2} {:<+3} {:.6}", index + 2, found.offset, found.score)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_report() {
        let report = FrameReport {
            frame: 42,
            depth: 5,
            sync_radius: None,
            matches: Vec::new(),
        };
        assert_eq!(report.to_string(), "FRAME: 42\nCLIPS: 5\n");
    }

    #[test]
    fn test_sync_report() {
        let report = FrameReport {
            frame: 7,
            depth: 3,
            sync_radius: Some(2),
            matches: vec![
                SyncMatch {
                    offset: -2,
                    score: 98.5,
                },
                SyncMatch {
                    offset: 1,
                    score: 100.0,
                },
            ],
        };
        let lines: Vec<String> = report.to_string().lines().map(str::to_owned).collect();
        assert_eq!(
            lines,
            vec![
                "FRAME: 7",
                "CLIPS: 3",
                "SYNC RADIUS: 2",
                "SYNC METRICS:",
                "2  -2  98.500000",
                "3  +1  100.000000",
            ]
        );
    }
}
