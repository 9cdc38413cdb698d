//! Цена со скидкой, прибыль и маржа товара.

use contracts::domain::a004_product::Product;

/// Ценовые поля товара
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceInput {
    pub price: f64,
    pub discount_price: Option<f64>,
    pub discount_percent: Option<f64>,
    pub cost_price: Option<f64>,
}

impl From<&Product> for PriceInput {
    fn from(p: &Product) -> Self {
        Self {
            price: p.price,
            discount_price: p.discount_price,
            discount_percent: p.discount_percent,
            cost_price: p.cost_price,
        }
    }
}

impl PriceInput {
    pub fn new(price: f64) -> Self {
        Self {
            price,
            ..Self::default()
        }
    }

    pub fn with_discount_price(mut self, value: f64) -> Self {
        self.discount_price = Some(value);
        self
    }

    pub fn with_discount_percent(mut self, value: f64) -> Self {
        self.discount_percent = Some(value);
        self
    }

    pub fn with_cost_price(mut self, value: f64) -> Self {
        self.cost_price = Some(value);
        self
    }

    /// Итоговая цена с ограничением процента скидки диапазоном 0..=100
    pub fn effective_price(&self) -> f64 {
        self.effective_price_with(true)
    }

    /// Итоговая цена.
    ///
    /// Абсолютная скидка применяется, только если она положительна и строго
    /// меньше базовой цены; иначе применяется положительный процент; иначе
    /// базовая цена. При `clamp_percent = false` процент берётся как есть.
    pub fn effective_price_with(&self, clamp_percent: bool) -> f64 {
        if let Some(dp) = self.discount_price {
            if dp > 0.0 && dp < self.price {
                return dp;
            }
        }
        if let Some(pct) = self.discount_percent {
            if pct > 0.0 {
                let pct = if clamp_percent && pct > 100.0 {
                    log::warn!("discount percent {} is out of range, clamped to 100", pct);
                    100.0
                } else {
                    pct
                };
                return self.price - self.price * pct / 100.0;
            }
        }
        self.price
    }

    /// Размер скидки относительно базовой цены
    pub fn discount_amount(&self) -> f64 {
        self.price - self.effective_price()
    }

    pub fn has_discount(&self) -> bool {
        self.discount_amount() > 0.0
    }

    /// Прибыль; определена только при положительной себестоимости
    pub fn profit(&self) -> Option<f64> {
        self.profit_with(true)
    }

    pub fn profit_with(&self, clamp_percent: bool) -> Option<f64> {
        match self.cost_price {
            Some(cost) if cost > 0.0 => Some(self.effective_price_with(clamp_percent) - cost),
            _ => None,
        }
    }

    /// Маржа в процентах от итоговой цены
    pub fn margin(&self) -> Option<f64> {
        self.margin_with(true)
    }

    pub fn margin_with(&self, clamp_percent: bool) -> Option<f64> {
        let effective = self.effective_price_with(clamp_percent);
        if effective <= 0.0 {
            return None;
        }
        self.profit_with(clamp_percent)
            .map(|profit| profit * 100.0 / effective)
    }
}

/// Проверка процента скидки перед сохранением формы
pub fn validate_discount_percent(value: f64) -> Result<(), String> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(format!("Discount percent must be within 0..100, got {}", value));
    }
    Ok(())
}

/// Округление до копеек
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
