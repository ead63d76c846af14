//! First-match rule tables.
//!
//! Every garment attribute is decided by an ordered list of
//! `(predicate, value)` pairs: the first predicate that holds wins, and a
//! named fallback applies when none fires. The tables are deliberately not
//! exhaustive or probabilistic; the ordering IS the contract, so keeping it
//! explicit as data makes each rule unit-testable.

/// One ordered decision rule.
pub struct Rule<Ctx> {
    /// Attribute value produced when the predicate holds.
    pub value: &'static str,
    pub applies: fn(&Ctx) -> bool,
}

/// Evaluate rules in order; the first match wins, else the fallback.
pub fn first_match<Ctx>(rules: &[Rule<Ctx>], ctx: &Ctx, fallback: &'static str) -> &'static str {
    rules
        .iter()
        .find(|rule| (rule.applies)(ctx))
        .map(|rule| rule.value)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_rule_shadows_later_one() {
        let rules: &[Rule<i32>] = &[
            Rule {
                value: "first",
                applies: |&n| n > 0,
            },
            Rule {
                value: "second",
                applies: |&n| n > 10,
            },
        ];
        assert_eq!(first_match(rules, &50, "none"), "first");
        assert_eq!(first_match(rules, &-1, "none"), "none");
    }
}
