use crate::catalog::Work;
use serde::Serialize;

/// A composition-year bucket, as offered by a period filter.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct YearPeriod {
    pub value: String,
    pub label: String,
    pub from: i32,
    pub to: i32,
}

const SINGLE_YEAR_SPAN: i32 = 10;
const FIVE_YEAR_SPAN: i32 = 50;

/// Buckets covering every composition year of `works`: single years for a
/// short span, 5-year buckets for a medium one, decades otherwise.
pub fn composition_periods<'a, I>(works: I) -> Vec<YearPeriod>
where
    I: IntoIterator<Item = &'a Work>,
{
    let years: Vec<i32> = works.into_iter().filter_map(|w| w.year_composed).collect();
    let (Some(&min), Some(&max)) = (years.iter().min(), years.iter().max()) else {
        return vec![];
    };

    let span = max - min;
    if span <= SINGLE_YEAR_SPAN {
        return (min..=max)
            .map(|year| YearPeriod {
                value: year.to_string(),
                label: year.to_string(),
                from: year,
                to: year,
            })
            .collect();
    }

    let width = if span <= FIVE_YEAR_SPAN { 5 } else { 10 };
    let first = min.div_euclid(width) * width;
    let last = max.div_euclid(width) * width;
    (first..=last)
        .step_by(width as usize)
        .map(|start| {
            let end = start + width - 1;
            let value = format!("{}-{}", start, end);
            let label = if width == 10 {
                format!("{}s", start)
            } else {
                value.clone()
            };
            YearPeriod {
                value,
                label,
                from: start,
                to: end,
            }
        })
        .collect()
}
