/// Interest measures of a rule `X -> Y`, computed from raw counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleMeasures {
    /// P(X ∪ Y)
    pub support: f64,
    /// P(Y | X)
    pub confidence: f64,
    /// confidence / P(Y); +inf when Y never occurs
    pub lift: f64,
    /// P(X ∪ Y) - P(X)·P(Y)
    pub leverage: f64,
    /// P(X)·P(¬Y) / P(X ∧ ¬Y); +inf when X never occurs without Y
    pub conviction: f64,
    /// odds(Y | X) / odds(Y | ¬X) over the 2x2 contingency table
    pub odds_ratio: f64,
}

impl RuleMeasures {
    /// `antecedent`, `consequent` and `both` are transaction counts out of
    /// `num_transactions`.
    pub fn from_counts(
        num_transactions: usize,
        antecedent: usize,
        consequent: usize,
        both: usize,
    ) -> Self {
        let n = num_transactions as f64;
        let p_x = antecedent as f64 / n;
        let p_y = consequent as f64 / n;
        let p_xy = both as f64 / n;

        let confidence = if antecedent > 0 {
            both as f64 / antecedent as f64
        } else {
            0.0
        };

        let lift = if consequent > 0 {
            confidence / p_y
        } else {
            f64::INFINITY
        };

        // Contingency cells
        let x_not_y = antecedent.saturating_sub(both);
        let not_x_y = consequent.saturating_sub(both);
        let neither = (num_transactions + both).saturating_sub(antecedent + consequent);

        let conviction = if x_not_y > 0 {
            p_x * (1.0 - p_y) / (x_not_y as f64 / n)
        } else {
            f64::INFINITY
        };

        // odds(Y | X) / odds(Y | ¬X); an empty ¬X∧¬Y cell makes the second
        // odds infinite and the ratio zero.
        let odds_ratio = if x_not_y == 0 {
            f64::INFINITY
        } else if neither == 0 {
            0.0
        } else if not_x_y == 0 {
            f64::INFINITY
        } else {
            (both as f64 * neither as f64) / (x_not_y as f64 * not_x_y as f64)
        };

        Self {
            support: p_xy,
            confidence,
            lift,
            leverage: p_xy - p_x * p_y,
            conviction,
            odds_ratio,
        }
    }
}
