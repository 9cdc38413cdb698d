//! Итоги по списку: счётчики и суммы.
//!
//! Каждая метрика явно указывает, считается она по всему набору записей или
//! только по отфильтрованному. Итоги всегда пересчитываются целиком.

/// Набор записей, по которому считается метрика
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Full,
    Filtered,
}

pub enum MetricKind<T> {
    Count,
    CountWhere(fn(&T) -> bool),
    Sum(fn(&T) -> f64),
    SumWhere { value: fn(&T) -> f64, when: fn(&T) -> bool },
}

// Ручные impl: derive потребовал бы `T: Clone`
impl<T> Clone for MetricKind<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MetricKind<T> {}

pub struct Metric<T> {
    pub name: &'static str,
    pub scope: Scope,
    pub kind: MetricKind<T>,
}

impl<T> Clone for Metric<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Metric<T> {}

impl<T> Metric<T> {
    pub fn count(name: &'static str, scope: Scope) -> Self {
        Self { name, scope, kind: MetricKind::Count }
    }

    pub fn count_where(name: &'static str, scope: Scope, pred: fn(&T) -> bool) -> Self {
        Self { name, scope, kind: MetricKind::CountWhere(pred) }
    }

    pub fn sum(name: &'static str, scope: Scope, value: fn(&T) -> f64) -> Self {
        Self { name, scope, kind: MetricKind::Sum(value) }
    }

    pub fn sum_where(
        name: &'static str,
        scope: Scope,
        value: fn(&T) -> f64,
        when: fn(&T) -> bool,
    ) -> Self {
        Self { name, scope, kind: MetricKind::SumWhere { value, when } }
    }

    /// Значение метрики по переданным записям
    pub fn evaluate<'a, I>(&self, records: I) -> f64
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let records = records.into_iter();
        match self.kind {
            MetricKind::Count => records.count() as f64,
            MetricKind::CountWhere(pred) => records.filter(|r| pred(r)).count() as f64,
            MetricKind::Sum(value) => records.map(|r| finite_or_zero(value(r))).sum(),
            MetricKind::SumWhere { value, when } => records
                .filter(|r| when(r))
                .map(|r| finite_or_zero(value(r)))
                .sum(),
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateValue {
    pub name: &'static str,
    pub scope: Scope,
    pub value: f64,
}

/// Итоги в порядке объявления метрик
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Aggregates {
    pub values: Vec<AggregateValue>,
}

impl Aggregates {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.iter().find(|v| v.name == name).map(|v| v.value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Считает все метрики; `full` — весь набор, `filtered` — результат фильтра
pub fn compute_aggregates<T>(full: &[T], filtered: &[&T], metrics: &[Metric<T>]) -> Aggregates {
    let values = metrics
        .iter()
        .map(|m| AggregateValue {
            name: m.name,
            scope: m.scope,
            value: match m.scope {
                Scope::Full => m.evaluate(full.iter()),
                Scope::Filtered => m.evaluate(filtered.iter().copied()),
            },
        })
        .collect();
    Aggregates { values }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rec {
        status: &'static str,
        price: f64,
    }

    fn records() -> Vec<Rec> {
        vec![
            Rec { status: "paid", price: 10.0 },
            Rec { status: "pending", price: 5.0 },
            Rec { status: "paid", price: 20.0 },
        ]
    }

    #[test]
    fn test_sum_where_paid() {
        let data = records();
        let metric = Metric::sum_where("paid", Scope::Full, |r: &Rec| r.price, |r: &Rec| r.status == "paid");
        assert_eq!(metric.evaluate(data.iter()), 30.0);
    }

    #[test]
    fn test_scope_full_vs_filtered() {
        let data = records();
        let filtered: Vec<&Rec> = data.iter().filter(|r| r.price > 6.0).collect();
        let metrics = [
            Metric::count("total", Scope::Full),
            Metric::count("shown", Scope::Filtered),
            Metric::count_where("pending", Scope::Full, |r: &Rec| r.status == "pending"),
            Metric::sum("shown_sum", Scope::Filtered, |r: &Rec| r.price),
        ];
        let agg = compute_aggregates(&data, &filtered, &metrics);
        assert_eq!(agg.get("total"), Some(3.0));
        assert_eq!(agg.get("shown"), Some(2.0));
        assert_eq!(agg.get("pending"), Some(1.0));
        assert_eq!(agg.get("shown_sum"), Some(30.0));
        assert_eq!(agg.get("missing"), None);
        assert_eq!(agg.values[1].scope, Scope::Filtered);
    }

    #[test]
    fn test_non_finite_values_count_as_zero() {
        let data = vec![Rec { status: "paid", price: f64::NAN }, Rec { status: "paid", price: 2.5 }];
        let metric = Metric::sum("sum", Scope::Full, |r: &Rec| r.price);
        assert_eq!(metric.evaluate(data.iter()), 2.5);
    }

    #[test]
    fn test_empty_input() {
        let data: Vec<Rec> = Vec::new();
        let agg = compute_aggregates(&data, &[], &[Metric::sum("sum", Scope::Filtered, |r: &Rec| r.price)]);
        assert_eq!(agg.get("sum"), Some(0.0));
    }
}
