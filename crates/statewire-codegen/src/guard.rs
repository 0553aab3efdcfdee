//! Guard predicate rendering and debounce bookkeeping.

use statewire_core::Expression;

/// Helper for rendering guard expressions and their debounce statements.
///
/// All three emitters walk the tree with the same pre-order traversal, so
/// the bounce-guard recomputations, the predicate's sensor reads and the
/// timestamp resets always list sensors in the same left-to-right order,
/// one entry per condition leaf, duplicates included.
pub struct GuardCodegen;

impl GuardCodegen {
    /// Render the boolean predicate for the transition's conditional.
    ///
    /// A condition reads its sensor's pin and requires the bounce guard;
    /// `And`/`Or` fully parenthesize both children.
    pub fn predicate(expr: &Expression) -> String {
        match expr {
            Expression::Condition { sensor, value } => format!(
                "digitalRead({}) == {} && {}BounceGuard",
                sensor.pin, value, sensor.name
            ),
            Expression::And { left, right } => format!(
                "({}) && ({})",
                Self::predicate(left),
                Self::predicate(right)
            ),
            Expression::Or { left, right } => format!(
                "({}) || ({})",
                Self::predicate(left),
                Self::predicate(right)
            ),
        }
    }

    /// One bounce-guard recomputation per condition leaf, emitted before
    /// the conditional.
    pub fn bounce_updates(expr: &Expression) -> String {
        let mut code = String::new();
        expr.each_condition(&mut |sensor, _| {
            code.push_str(&format!(
                "\t\t\t{0}BounceGuard = millis() - {0}LastDebounceTime > debounce;\n",
                sensor.name
            ));
        });
        code
    }

    /// One debounce timestamp reset per condition leaf, emitted inside the
    /// conditional body, in the same order as the recomputations.
    pub fn timestamp_resets(expr: &Expression) -> String {
        let mut code = String::new();
        expr.each_condition(&mut |sensor, _| {
            code.push_str(&format!(
                "\t\t\t\t{}LastDebounceTime = millis();\n",
                sensor.name
            ));
        });
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statewire_core::{BrickRef, Signal};

    fn condition(name: &str, pin: u8, value: Signal) -> Expression {
        Expression::condition(
            BrickRef {
                name: name.to_string(),
                pin,
            },
            value,
        )
    }

    #[test]
    fn test_condition_predicate() {
        let expr = condition("button", 9, Signal::High);
        assert_eq!(
            GuardCodegen::predicate(&expr),
            "digitalRead(9) == HIGH && buttonBounceGuard"
        );
    }

    #[test]
    fn test_and_predicate_parenthesizes_children() {
        let expr = Expression::and(
            condition("b1", 8, Signal::High),
            condition("b2", 9, Signal::High),
        );
        assert_eq!(
            GuardCodegen::predicate(&expr),
            "(digitalRead(8) == HIGH && b1BounceGuard) && (digitalRead(9) == HIGH && b2BounceGuard)"
        );
    }

    #[test]
    fn test_or_predicate_parenthesizes_children() {
        let expr = Expression::or(
            condition("b1", 8, Signal::Low),
            condition("b2", 9, Signal::Low),
        );
        assert_eq!(
            GuardCodegen::predicate(&expr),
            "(digitalRead(8) == LOW && b1BounceGuard) || (digitalRead(9) == LOW && b2BounceGuard)"
        );
    }

    #[test]
    fn test_nested_predicate_keeps_structure() {
        // (b1 && b2) || b3
        let expr = Expression::or(
            Expression::and(
                condition("b1", 7, Signal::High),
                condition("b2", 8, Signal::High),
            ),
            condition("b3", 9, Signal::High),
        );
        let rendered = GuardCodegen::predicate(&expr);
        assert!(rendered.starts_with("((digitalRead(7)"));
        assert!(rendered.contains(") || (digitalRead(9)"));
    }

    #[test]
    fn test_updates_and_resets_match_leaf_count_and_order() {
        let expr = Expression::and(
            condition("b1", 8, Signal::High),
            condition("b2", 9, Signal::High),
        );

        let updates = GuardCodegen::bounce_updates(&expr);
        let resets = GuardCodegen::timestamp_resets(&expr);

        assert_eq!(updates.lines().count(), expr.leaf_count());
        assert_eq!(resets.lines().count(), expr.leaf_count());

        let update_order: Vec<usize> = ["b1BounceGuard", "b2BounceGuard"]
            .iter()
            .map(|needle| updates.find(needle).unwrap())
            .collect();
        assert!(update_order[0] < update_order[1]);

        let reset_order: Vec<usize> = ["b1LastDebounceTime", "b2LastDebounceTime"]
            .iter()
            .map(|needle| resets.find(needle).unwrap())
            .collect();
        assert!(reset_order[0] < reset_order[1]);
    }

    #[test]
    fn test_duplicate_sensor_emits_one_line_per_leaf() {
        let expr = Expression::or(
            condition("b1", 8, Signal::High),
            condition("b1", 8, Signal::Low),
        );
        assert_eq!(GuardCodegen::bounce_updates(&expr).lines().count(), 2);
        assert_eq!(GuardCodegen::timestamp_resets(&expr).lines().count(), 2);
    }
}
