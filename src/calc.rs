use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkState {
    Unmarked,
    Scored(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageMarks {
    pub average: f64,
    pub marked_count: usize,
    pub unmarked_count: usize,
}

/// Class average for one assessment. The denominator is the full class size:
/// unmarked students contribute 0 to the numerator but still count, so the
/// caller must surface `unmarked_count` alongside the average.
pub fn average_marks<I>(marks: I) -> AverageMarks
where
    I: IntoIterator<Item = MarkState>,
{
    let mut total: f64 = 0.0;
    let mut marked_count: usize = 0;
    let mut unmarked_count: usize = 0;

    for m in marks {
        match m {
            MarkState::Unmarked => {
                unmarked_count += 1;
            }
            MarkState::Scored(v) => {
                marked_count += 1;
                total += v;
            }
        }
    }

    let class_size = marked_count + unmarked_count;
    let average = if class_size > 0 {
        total / (class_size as f64)
    } else {
        0.0
    };

    AverageMarks {
        average,
        marked_count,
        unmarked_count,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedianMarks {
    pub median: f64,
    pub marked_count: usize,
    pub unmarked_count: usize,
}

/// Median over recorded marks only. Unmarked students are excluded from the
/// median (unlike the average) but still counted for reporting. Returns None
/// when no student has been marked.
pub fn median_marks<I>(marks: I) -> Option<MedianMarks>
where
    I: IntoIterator<Item = MarkState>,
{
    let mut scored: Vec<f64> = Vec::new();
    let mut unmarked_count: usize = 0;

    for m in marks {
        match m {
            MarkState::Unmarked => unmarked_count += 1,
            MarkState::Scored(v) => scored.push(v),
        }
    }

    if scored.is_empty() {
        return None;
    }

    scored.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let n = scored.len();
    let median = if n % 2 == 1 {
        scored[n / 2]
    } else {
        (scored[n / 2 - 1] + scored[n / 2]) / 2.0
    };

    Some(MedianMarks {
        median,
        marked_count: n,
        unmarked_count,
    })
}

/// Marks formatted to 2 decimal places with grouped thousands,
/// e.g. `11.67`, `1,234.50`.
pub fn format_marks(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_counts_unmarked_in_denominator() {
        let avg = average_marks([
            MarkState::Scored(20.0),
            MarkState::Scored(15.0),
            MarkState::Unmarked,
        ]);
        assert_eq!(avg.marked_count, 2);
        assert_eq!(avg.unmarked_count, 1);
        // Unmarked student counts as zero, not excluded: (20 + 15 + 0) / 3.
        assert!((avg.average - 35.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn average_times_class_size_equals_sum_of_marks() {
        let marks = [
            MarkState::Scored(42.5),
            MarkState::Unmarked,
            MarkState::Scored(81.0),
            MarkState::Unmarked,
            MarkState::Scored(0.0),
        ];
        let avg = average_marks(marks);
        let n = (avg.marked_count + avg.unmarked_count) as f64;
        assert!((avg.average * n - (42.5 + 81.0)).abs() < 1e-9);
    }

    #[test]
    fn average_of_empty_class_is_zero() {
        let avg = average_marks([]);
        assert_eq!(avg.average, 0.0);
        assert_eq!(avg.marked_count, 0);
        assert_eq!(avg.unmarked_count, 0);
    }

    #[test]
    fn median_excludes_unmarked() {
        let med = median_marks([
            MarkState::Scored(10.0),
            MarkState::Unmarked,
            MarkState::Scored(30.0),
            MarkState::Scored(20.0),
        ])
        .expect("median");
        assert_eq!(med.median, 20.0);
        assert_eq!(med.marked_count, 3);
        assert_eq!(med.unmarked_count, 1);
    }

    #[test]
    fn median_of_even_count_is_midpoint() {
        let med = median_marks([MarkState::Scored(10.0), MarkState::Scored(20.0)]).expect("median");
        assert_eq!(med.median, 15.0);
    }

    #[test]
    fn median_with_no_marked_students_is_none() {
        assert!(median_marks([MarkState::Unmarked, MarkState::Unmarked]).is_none());
    }

    #[test]
    fn format_marks_groups_thousands() {
        assert_eq!(format_marks(11.666_666), "11.67");
        assert_eq!(format_marks(1234.5), "1,234.50");
        assert_eq!(format_marks(1_234_567.891), "1,234,567.89");
        assert_eq!(format_marks(0.0), "0.00");
        assert_eq!(format_marks(999.999), "1,000.00");
    }
}
