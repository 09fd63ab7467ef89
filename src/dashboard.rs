//! Dashboard Helpers
//!
//! Presentation-side shaping of the admin dashboard payload.

use crate::models::{DashboardStats, MonthlySales, TopBook};

/// One bar of the monthly revenue chart
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Height relative to the tallest bar, 0..=100
    pub percent: f64,
}

/// Scale monthly revenue into chart bars
pub fn revenue_bars(sales: &[MonthlySales]) -> Vec<Bar> {
    let max = sales.iter().map(|s| s.revenue).fold(0.0_f64, f64::max);
    sales
        .iter()
        .map(|s| Bar {
            label: s.month.clone(),
            value: s.revenue,
            percent: if max > 0.0 { (s.revenue / max * 100.0).clamp(0.0, 100.0) } else { 0.0 },
        })
        .collect()
}

/// Best sellers by copies sold, ties broken by revenue
pub fn top_books(stats: &DashboardStats, limit: usize) -> Vec<TopBook> {
    let mut books = stats.top_books.clone();
    books.sort_by(|a, b| b.sold.cmp(&a.sold).then(b.revenue.total_cmp(&a.revenue)));
    books.truncate(limit);
    books
}

pub fn average_order_value(stats: &DashboardStats) -> f64 {
    if stats.total_orders == 0 {
        0.0
    } else {
        stats.total_revenue / stats.total_orders as f64
    }
}

/// Revenue change of the last month against the one before, in percent
pub fn month_over_month(sales: &[MonthlySales]) -> Option<f64> {
    match sales {
        [.., prev, last] if prev.revenue > 0.0 => Some((last.revenue - prev.revenue) / prev.revenue * 100.0),
        _ => None,
    }
}

/// 950 -> "950", 1_200 -> "1.2k", 3_400_000 -> "3.4M"
pub fn format_compact(n: u64) -> String {
    if n < 1_000 {
        return n.to_string();
    }
    // Round to one decimal before picking the unit so 999_950 reads "1M"
    let tenths_of_k = (n as f64 / 100.0).round();
    if tenths_of_k < 10_000.0 {
        trim_decimal(tenths_of_k / 10.0, "k")
    } else {
        trim_decimal((n as f64 / 100_000.0).round() / 10.0, "M")
    }
}

fn trim_decimal(value: f64, suffix: &str) -> String {
    let s = format!("{:.1}", value);
    let s = s.strip_suffix(".0").unwrap_or(&s);
    format!("{}{}", s, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(m: &str, revenue: f64) -> MonthlySales {
        MonthlySales { month: m.to_string(), revenue, orders: 1 }
    }

    #[test]
    fn test_revenue_bars_scale_to_max() {
        let bars = revenue_bars(&[month("Jan", 50.0), month("Feb", 200.0), month("Mar", 0.0)]);
        assert_eq!(bars[0].percent, 25.0);
        assert_eq!(bars[1].percent, 100.0);
        assert_eq!(bars[2].percent, 0.0);
    }

    #[test]
    fn test_revenue_bars_all_zero() {
        let bars = revenue_bars(&[month("Jan", 0.0)]);
        assert_eq!(bars[0].percent, 0.0);
        assert!(revenue_bars(&[]).is_empty());
    }

    #[test]
    fn test_top_books_order_and_limit() {
        let stats = DashboardStats {
            top_books: vec![
                TopBook { title: "A".into(), sold: 3, revenue: 30.0 },
                TopBook { title: "B".into(), sold: 9, revenue: 10.0 },
                TopBook { title: "C".into(), sold: 3, revenue: 60.0 },
            ],
            ..Default::default()
        };
        let top: Vec<String> = top_books(&stats, 2).into_iter().map(|b| b.title).collect();
        assert_eq!(top, vec!["B", "C"]);
    }

    #[test]
    fn test_average_order_value() {
        let mut stats = DashboardStats::default();
        assert_eq!(average_order_value(&stats), 0.0);
        stats.total_orders = 4;
        stats.total_revenue = 100.0;
        assert_eq!(average_order_value(&stats), 25.0);
    }

    #[test]
    fn test_month_over_month() {
        assert_eq!(month_over_month(&[month("Jan", 100.0), month("Feb", 150.0)]), Some(50.0));
        assert_eq!(month_over_month(&[month("Jan", 0.0), month("Feb", 150.0)]), None);
        assert_eq!(month_over_month(&[month("Jan", 100.0)]), None);
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(950), "950");
        assert_eq!(format_compact(1_000), "1k");
        assert_eq!(format_compact(1_240), "1.2k");
        assert_eq!(format_compact(3_400_000), "3.4M");
        assert_eq!(format_compact(999_950), "1M");
        assert_eq!(format_compact(999_940), "999.9k");
        assert_eq!(format_compact(999), "999");
    }
}
