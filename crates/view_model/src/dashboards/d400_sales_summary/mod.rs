//! Сводка для страницы отчётов: выручка по месяцам, бронирования по
//! статусам, лучшие товары по марже.

use crate::domain::a004_product::ProductRow;
use contracts::domain::a001_booking::Booking;
use contracts::domain::a005_payment::Payment;
use contracts::enums::{BookingStatus, PaymentStatus};
use serde::Serialize;
use std::collections::BTreeMap;

/// Выручка за месяц (`YYYY-MM`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    pub month: String,
    pub revenue: f64,
    pub payments: usize,
}

/// Чистая выручка оплаченных платежей по месяцам, по возрастанию месяца
pub fn revenue_by_month(payments: &[Payment]) -> Vec<MonthlyRevenue> {
    let mut months: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for p in payments.iter().filter(|p| p.status == PaymentStatus::Paid) {
        let entry = months
            .entry(p.created_at.format("%Y-%m").to_string())
            .or_insert((0.0, 0));
        let net = p.net_amount();
        if net.is_finite() {
            entry.0 += net;
        }
        entry.1 += 1;
    }
    months
        .into_iter()
        .map(|(month, (revenue, payments))| MonthlyRevenue {
            month,
            revenue,
            payments,
        })
        .collect()
}

/// Количество бронирований по каждому статусу (отсутствующие — нулём)
pub fn bookings_by_status(bookings: &[Booking]) -> BTreeMap<BookingStatus, usize> {
    let mut counts: BTreeMap<BookingStatus, usize> =
        BookingStatus::all().into_iter().map(|s| (s, 0)).collect();
    for b in bookings {
        *counts.entry(b.status).or_insert(0) += 1;
    }
    counts
}

/// `limit` товаров с наибольшей маржой; товары без маржи не участвуют
pub fn top_products_by_margin<'a>(rows: &[ProductRow<'a>], limit: usize) -> Vec<(&'a str, f64)> {
    let mut ranked: Vec<(&'a str, f64)> = rows
        .iter()
        .filter_map(|r| r.margin.map(|m| (r.product.id.as_str(), m)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(limit);
    ranked
}
