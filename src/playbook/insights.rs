use super::entry::{Entry, EntryKind};

/// Shown when the playbook has no entries at all.
pub const NOT_ENOUGH_DATA: &str =
    "Not enough data yet. Save winning content to your playbook to unlock insights.";
/// Fired when more than 40% of saved hooks contain a '?' or '!'.
pub const CURIOSITY_HOOKS: &str =
    "Curiosity hooks are carrying your results: most of your winners ask a question or make a bold claim. Lead with one.";
/// Fired when more than 40% of saved hooks contain a digit.
pub const NUMBER_HOOKS: &str =
    "Hooks built on numbers and quantifiable claims keep landing. Put a concrete figure up front.";
/// Fired whenever at least one script has been saved.
pub const TRANSFORMATION_SCRIPTS: &str =
    "Transformation and outcome framing works for your audience. Your saved scripts show the before-and-after arc.";
/// Shown when the playbook is non-empty but no pattern rule fired.
pub const DIVERSE_WINNERS: &str =
    "Your winners are diverse. Keep experimenting until a repeatable pattern emerges.";

/// Fraction of hooks that must match a content pattern before the
/// corresponding insight fires.
const PATTERN_THRESHOLD: f64 = 0.4;

/// Derives an ordered, never-empty list of observations from a playbook
/// snapshot. Pure function of the snapshot; total over anything the store
/// can produce, including out-of-range scores and empty content.
pub fn derive_insights(entries: &[Entry]) -> Vec<String> {
    if entries.is_empty() {
        return vec![NOT_ENOUGH_DATA.to_string()];
    }

    // Hashtags join neither partition.
    let hooks: Vec<&Entry> = entries.iter().filter(|e| e.kind == EntryKind::Hook).collect();
    let has_scripts = entries.iter().any(|e| e.kind == EntryKind::Script);

    let mut insights = Vec::new();

    if !hooks.is_empty() {
        let question_fraction =
            hook_fraction(&hooks, |content| content.contains('?') || content.contains('!'));
        let number_fraction =
            hook_fraction(&hooks, |content| content.chars().any(|c| c.is_ascii_digit()));

        if question_fraction > PATTERN_THRESHOLD {
            insights.push(CURIOSITY_HOOKS.to_string());
        }
        if number_fraction > PATTERN_THRESHOLD {
            insights.push(NUMBER_HOOKS.to_string());
        }
    }

    // No threshold for scripts; presence alone triggers.
    if has_scripts {
        insights.push(TRANSFORMATION_SCRIPTS.to_string());
    }

    if insights.is_empty() {
        insights.push(DIVERSE_WINNERS.to_string());
    }

    insights
}

fn hook_fraction(hooks: &[&Entry], matches: impl Fn(&str) -> bool) -> f64 {
    let matching = hooks.iter().filter(|e| matches(&e.content)).count();
    matching as f64 / hooks.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playbook::entry::EntryDraft;

    fn entry(kind: EntryKind, content: &str) -> Entry {
        Entry::from_draft(EntryDraft::new(kind, content, 90.0, "test"))
    }

    #[test]
    fn test_empty_snapshot_single_message() {
        let insights = derive_insights(&[]);
        assert_eq!(insights, vec![NOT_ENOUGH_DATA.to_string()]);
    }

    #[test]
    fn test_question_fraction_above_threshold_fires() {
        // 5 of 10 hooks carry '?' or '!': 0.5 > 0.4
        let mut entries: Vec<Entry> = (0..5)
            .map(|i| entry(EntryKind::Hook, &format!("would you believe this{}?", i)))
            .collect();
        entries.extend((0..5).map(|_| entry(EntryKind::Hook, "plain statement hook")));

        let insights = derive_insights(&entries);
        assert!(insights.contains(&CURIOSITY_HOOKS.to_string()));
    }

    #[test]
    fn test_question_fraction_at_threshold_does_not_fire() {
        // 3 of 10: 0.3, and 4 of 10 checks the strict inequality at 0.4
        for qualifying in [3usize, 4] {
            let mut entries: Vec<Entry> = (0..qualifying)
                .map(|_| entry(EntryKind::Hook, "seriously!"))
                .collect();
            entries
                .extend((qualifying..10).map(|_| entry(EntryKind::Hook, "plain statement hook")));

            let insights = derive_insights(&entries);
            assert!(
                !insights.contains(&CURIOSITY_HOOKS.to_string()),
                "{qualifying}/10 qualifying hooks must not fire the curiosity insight"
            );
        }
    }

    #[test]
    fn test_number_fraction_fires_independently() {
        let entries = vec![
            entry(EntryKind::Hook, "3 mistakes that cost me 10k followers"),
            entry(EntryKind::Hook, "the 1 habit of top creators"),
            entry(EntryKind::Hook, "plain statement hook"),
        ];

        let insights = derive_insights(&entries);
        assert!(insights.contains(&NUMBER_HOOKS.to_string()));
        assert!(!insights.contains(&CURIOSITY_HOOKS.to_string()));
    }

    #[test]
    fn test_both_hook_insights_can_fire_in_order() {
        let entries = vec![
            entry(EntryKind::Hook, "want 10x reach?"),
            entry(EntryKind::Hook, "5 hooks that print views!"),
        ];

        let insights = derive_insights(&entries);
        assert_eq!(
            insights,
            vec![CURIOSITY_HOOKS.to_string(), NUMBER_HOOKS.to_string()]
        );
    }

    #[test]
    fn test_script_presence_always_fires() {
        let entries = vec![
            entry(EntryKind::Hook, "plain statement hook"),
            entry(EntryKind::Script, ""),
        ];

        let insights = derive_insights(&entries);
        assert!(insights.contains(&TRANSFORMATION_SCRIPTS.to_string()));
    }

    #[test]
    fn test_script_insight_ordered_after_hook_insights() {
        let entries = vec![
            entry(EntryKind::Hook, "how did this blow up?"),
            entry(EntryKind::Script, "I went from 0 to 100k"),
        ];

        let insights = derive_insights(&entries);
        assert_eq!(
            insights,
            vec![CURIOSITY_HOOKS.to_string(), TRANSFORMATION_SCRIPTS.to_string()]
        );
    }

    #[test]
    fn test_hashtags_only_yields_fallback() {
        let entries = vec![
            entry(EntryKind::Hashtag, "#growth"),
            entry(EntryKind::Hashtag, "#viral2024"),
        ];

        let insights = derive_insights(&entries);
        assert_eq!(insights, vec![DIVERSE_WINNERS.to_string()]);
    }

    #[test]
    fn test_below_threshold_hooks_yield_fallback() {
        let entries = vec![
            entry(EntryKind::Hook, "plain statement hook"),
            entry(EntryKind::Hook, "another plain one"),
            entry(EntryKind::Hook, "still no pattern here"),
        ];

        let insights = derive_insights(&entries);
        assert_eq!(insights, vec![DIVERSE_WINNERS.to_string()]);
    }

    #[test]
    fn test_tolerates_out_of_range_scores_and_empty_content() {
        let mut weird = entry(EntryKind::Hook, "");
        weird.score = f64::NAN;
        let mut negative = entry(EntryKind::Script, "outcome");
        negative.score = -40.0;

        let insights = derive_insights(&[weird, negative]);
        assert!(!insights.is_empty());
        assert!(insights.contains(&TRANSFORMATION_SCRIPTS.to_string()));
    }
}
