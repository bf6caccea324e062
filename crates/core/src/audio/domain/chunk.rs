/// A half-open time window `[start, end)` of the source audio, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChunkWindow {
    pub start: f64,
    pub end: f64,
}

impl ChunkWindow {
    /// Filename for this window's WAV artifact. Windows never overlap, so
    /// the `[start, end)` key is collision-free within a run.
    pub fn artifact_name(&self) -> String {
        format!("chunk_{}_{}.wav", self.start, self.end)
    }
}

/// Partition `[0, duration)` into contiguous windows of at most
/// `chunk_length` seconds, the last one truncated at `duration`.
///
/// A zero duration yields no windows. `chunk_length` is validated upstream
/// and must be positive.
pub fn plan_windows(duration: f64, chunk_length: f64) -> Vec<ChunkWindow> {
    let mut windows = Vec::new();
    let mut start = 0.0;
    while start < duration {
        let end = (start + chunk_length).min(duration);
        windows.push(ChunkWindow { start, end });
        start = end;
    }
    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 30.0, 0)]
    #[case(5.0, 30.0, 1)]
    #[case(30.0, 30.0, 1)]
    #[case(31.0, 30.0, 2)]
    #[case(65.0, 30.0, 3)]
    #[case(90.0, 30.0, 3)]
    #[case(0.5, 30.0, 1)]
    fn test_window_count(#[case] duration: f64, #[case] chunk: f64, #[case] expected: usize) {
        assert_eq!(plan_windows(duration, chunk).len(), expected);
    }

    #[test]
    fn test_windows_cover_duration_contiguously() {
        let windows = plan_windows(65.0, 30.0);
        assert_relative_eq!(windows[0].start, 0.0);
        for pair in windows.windows(2) {
            assert_relative_eq!(pair[0].end, pair[1].start);
            assert!(pair[0].start < pair[0].end);
        }
        assert_relative_eq!(windows.last().unwrap().end, 65.0);
    }

    #[test]
    fn test_sixty_five_second_track_splits_as_expected() {
        let windows = plan_windows(65.0, 30.0);
        assert_eq!(
            windows,
            vec![
                ChunkWindow {
                    start: 0.0,
                    end: 30.0
                },
                ChunkWindow {
                    start: 30.0,
                    end: 60.0
                },
                ChunkWindow {
                    start: 60.0,
                    end: 65.0
                },
            ]
        );
    }

    #[test]
    fn test_short_track_yields_single_full_window() {
        let windows = plan_windows(12.5, 30.0);
        assert_eq!(windows.len(), 1);
        assert_relative_eq!(windows[0].start, 0.0);
        assert_relative_eq!(windows[0].end, 12.5);
    }

    #[test]
    fn test_artifact_names_are_distinct() {
        let windows = plan_windows(65.0, 30.0);
        let names: Vec<String> = windows.iter().map(|w| w.artifact_name()).collect();
        assert_eq!(names, vec!["chunk_0_30.wav", "chunk_30_60.wav", "chunk_60_65.wav"]);
    }

    #[test]
    fn test_fractional_end_kept_in_name() {
        let windows = plan_windows(65.5, 30.0);
        assert_eq!(windows.last().unwrap().artifact_name(), "chunk_60_65.5.wav");
    }
}
