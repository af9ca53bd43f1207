#[cfg(test)]
mod tests {
    use convo_scorer::PolarityScorer;
    use convo_types::config::AnalyzerConfig;
    use convo_types::conversation::Conversation;
    use convo_types::message::{Intent, Label, Message, Role};

    use crate::aggregate::*;
    use crate::classify::classify;
    use crate::reply::FixedReplyPicker;
    use crate::report::generate_report;
    use crate::sentence::{sentence_scores, worst_sentence};
    use crate::session::SessionEngine;

    fn scorer() -> PolarityScorer {
        PolarityScorer::new().unwrap()
    }

    fn user_message(text: &str, score: f64) -> Message {
        Message::user(
            text,
            score,
            Label::from_compound(score),
            Intent::Other,
            0.0,
            text,
        )
    }

    // ─── Classifier Tests ────────────────────────────────────

    #[test]
    fn test_classify_empty_text() {
        let c = classify(&scorer(), "");
        assert_eq!(c.compound, 0.0);
        assert_eq!(c.label, Label::Neutral);
    }

    #[test]
    fn test_classify_is_pure() {
        let s = scorer();
        let a = classify(&s, "the delivery was terrible");
        let b = classify(&s, "the delivery was terrible");
        assert_eq!(a, b);
    }

    #[test]
    fn test_classify_positive_and_negative() {
        let s = scorer();
        assert_eq!(classify(&s, "I love it, great service").label, Label::Positive);
        assert_eq!(classify(&s, "this is terrible and awful").label, Label::Negative);
    }

    #[test]
    fn test_not_bad_forces_neutral() {
        let s = scorer();
        for text in [
            "not bad",
            "Not Bad at all",
            "honestly the support was NOT BAD considering everything",
        ] {
            let c = classify(&s, text);
            assert_eq!(c.compound, 0.0, "{:?}", text);
            assert_eq!(c.label, Label::Neutral, "{:?}", text);
        }
    }

    #[test]
    fn test_neutral_phrase_match_is_substring_based() {
        let s = scorer();
        // "okay" inside "okay-ish", "ok" inside "broken": the phrase
        // match is deliberately not word-boundary aware.
        assert_eq!(classify(&s, "an okay-ish experience").label, Label::Neutral);
        let c = classify(&s, "it arrived broken");
        assert_eq!(c.label, Label::Neutral);
        assert_eq!(c.compound, 0.0);
    }

    // ─── Aggregator Tests ────────────────────────────────────

    #[test]
    fn test_overall_empty() {
        assert_eq!(conversation_overall(&[]), (0.0, Label::Neutral));
    }

    #[test]
    fn test_overall_negative_average() {
        let (avg, label) = conversation_overall(&[0.4, -0.6, -0.8]);
        assert!((avg - (-1.0 / 3.0)).abs() < 1e-9, "got {}", avg);
        assert_eq!(label, Label::Negative);
    }

    #[test]
    fn test_overall_threshold_rule() {
        assert_eq!(conversation_overall(&[0.05]).1, Label::Positive);
        assert_eq!(conversation_overall(&[0.04]).1, Label::Neutral);
        assert_eq!(conversation_overall(&[-0.05]).1, Label::Negative);
    }

    #[test]
    fn test_escalation_consecutive_run() {
        use Label::{Negative as N, Positive as P};
        assert!(detect_escalation(&[P, N, N, N], 3));
        assert!(!detect_escalation(&[N, P, N, N], 3));
    }

    #[test]
    fn test_escalation_window_sizes() {
        use Label::{Negative as N, Neutral as Z};
        assert!(detect_escalation(&[N, N], 2));
        assert!(!detect_escalation(&[N, Z, N, Z, N, Z], 2));
        assert!(!detect_escalation(&[N, N, N], 4));
        assert!(!detect_escalation(&[], 3));
    }

    #[test]
    fn test_moving_average_shrinking_window() {
        assert_eq!(moving_average(&[1.0, 2.0, 3.0], 3), vec![1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_moving_average_window_one_is_identity() {
        let values = [0.3, -0.2, 0.9];
        assert_eq!(moving_average(&values, 1), values.to_vec());
    }

    #[test]
    fn test_moving_average_empty() {
        assert!(moving_average(&[], 3).is_empty());
    }

    #[test]
    fn test_moving_average_length_matches_input() {
        let values = [0.1, 0.2, 0.3, 0.4, 0.5];
        assert_eq!(moving_average(&values, 3).len(), values.len());
    }

    #[test]
    fn test_top_negative_stable_order() {
        let mut conv = Conversation::new();
        conv.push(user_message("mildly positive", 0.5));
        conv.push(user_message("first worst", -0.9));
        conv.push(user_message("slightly off", -0.2));
        conv.push(user_message("second worst", -0.9));

        let top = top_negative_messages(&conv, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].text, "first worst");
        assert_eq!(top[1].text, "second worst");
    }

    #[test]
    fn test_top_negative_skips_agent_messages() {
        let mut conv = Conversation::new();
        conv.push(user_message("user gripe", -0.4));
        conv.push(Message::agent("very negative agent text", -0.9, Label::Negative));

        let top = top_negative_messages(&conv, 3);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].role, Role::User);
    }

    // ─── Sentence Tests ──────────────────────────────────────

    #[test]
    fn test_worst_sentence_selected() {
        let s = scorer();
        let text = "I love the design. The delivery was terrible and slow. Nothing else to add.";
        let worst = worst_sentence(&s, text);
        assert_eq!(worst.sentence, "The delivery was terrible and slow.");
        assert_eq!(worst.label, Label::Negative);
    }

    #[test]
    fn test_worst_sentence_empty_text() {
        let worst = worst_sentence(&scorer(), "");
        assert_eq!(worst.sentence, "");
        assert_eq!(worst.compound, 0.0);
        assert_eq!(worst.label, Label::Neutral);
    }

    #[test]
    fn test_sentence_scores_match_direct_classification() {
        // each sentence must satisfy the same classify() contract as
        // calling classify() on it directly
        let s = scorer();
        let text = "I love the design. The delivery was terrible and slow. Nothing else to add.";
        let scored = sentence_scores(&s, text);
        assert_eq!(scored.len(), 3);
        for entry in scored {
            let direct = classify(&s, &entry.sentence);
            assert_eq!(entry.compound, direct.compound);
            assert_eq!(entry.label, direct.label);
        }
    }

    // ─── Report Tests ────────────────────────────────────────

    #[test]
    fn test_report_empty_conversation() {
        let report = generate_report(&Conversation::new(), 3);
        assert!(report.starts_with("Conversation Summary\n===================="));
        assert!(report.contains("Total messages: 0"));
        assert!(report.contains("Overall sentiment: Neutral (average compound = 0.000)"));
        assert!(report.contains("No user messages to highlight."));
    }

    #[test]
    fn test_report_ranks_negatives() {
        let mut conv = Conversation::new();
        conv.push(user_message("all good here", 0.6));
        conv.push(user_message("this is a disaster", -0.8));
        conv.push(user_message("still unhappy", -0.5));

        let report = generate_report(&conv, 3);
        assert!(report.contains("Total messages: 3"));
        assert!(report.contains("User messages: 3"));
        assert!(report.contains("Top negative user messages:"));
        assert!(report.contains("1. \"this is a disaster\" (score = -0.800)"));
        assert!(report.contains("2. \"still unhappy\" (score = -0.500)"));
    }

    #[test]
    fn test_report_respects_top_k() {
        let mut conv = Conversation::new();
        conv.push(user_message("this is a disaster", -0.8));
        conv.push(user_message("still unhappy", -0.5));
        conv.push(user_message("meh", -0.1));

        let report = generate_report(&conv, 1);
        assert!(report.contains("1. \"this is a disaster\""));
        assert!(!report.contains("2. \"still unhappy\""));

        let wide = generate_report(&conv, 10);
        assert!(wide.contains("3. \"meh\""));
    }

    // ─── Session Engine Tests ────────────────────────────────

    fn engine() -> SessionEngine {
        SessionEngine::with_reply_picker(AnalyzerConfig::default(), Box::new(FixedReplyPicker))
            .unwrap()
    }

    #[test]
    fn test_engine_rejects_bad_window() {
        let config = AnalyzerConfig {
            escalation_window: 1,
            ..Default::default()
        };
        assert!(SessionEngine::new(config).is_err());
    }

    #[test]
    fn test_submit_appends_user_then_agent() {
        let mut engine = engine();
        let turn = engine.submit("my invoice is wrong and I hate it");

        assert_eq!(engine.conversation().len(), 2);
        assert_eq!(turn.user.role, Role::User);
        assert_eq!(turn.user.intent, Intent::Billing);
        assert_eq!(turn.user.label, Label::Negative);
        assert_eq!(turn.agent.role, Role::Agent);
        assert_eq!(turn.agent.intent, Intent::Agent);
        assert_eq!(turn.agent.urgency, 0.0);
        assert!(turn.agent.worst_sentence.is_empty());

        let log = engine.conversation().messages();
        assert_eq!(log[0].id, turn.user.id);
        assert_eq!(log[1].id, turn.agent.id);
    }

    #[test]
    fn test_submit_empty_text_is_neutral() {
        let mut engine = engine();
        let turn = engine.submit("");
        assert_eq!(turn.user.score, 0.0);
        assert_eq!(turn.user.label, Label::Neutral);
        assert_eq!(turn.user.intent, Intent::Other);
        assert_eq!(turn.user.urgency, 0.0);
        assert_eq!(turn.user.worst_sentence, "");
    }

    #[test]
    fn test_urgency_stored_rounded() {
        let mut engine = engine();
        // one keyword (0.4) plus one exclamation (0.05)
        let turn = engine.submit("urgent!");
        assert!((turn.user.urgency - 0.45).abs() < 1e-9, "got {}", turn.user.urgency);
    }

    #[test]
    fn test_escalation_flag_after_negative_run() {
        let mut engine = engine();
        assert!(!engine.submit("this is terrible").escalated);
        assert!(!engine.submit("I hate this").escalated);
        assert!(engine.submit("awful, truly the worst").escalated);
        assert!(engine.escalated());
    }

    #[test]
    fn test_positive_message_breaks_streak() {
        let mut engine = engine();
        engine.submit("this is terrible");
        engine.submit("I hate this");
        engine.submit("thanks, that was great");
        assert!(!engine.submit("still a terrible experience").escalated);
    }

    #[test]
    fn test_reset_clears_conversation() {
        let mut engine = engine();
        engine.submit("hello there");
        engine.reset();
        assert!(engine.conversation().is_empty());
        assert_eq!(engine.overall(), (0.0, Label::Neutral));
        assert!(!engine.escalated());
        assert!(engine.trend().is_empty());
    }

    #[test]
    fn test_trend_tracks_user_messages_only() {
        let mut engine = engine();
        engine.submit("I love it, great service");
        engine.submit("this is terrible and awful");
        let trend = engine.trend();
        assert_eq!(trend.len(), 2);
        assert!(trend[0] > 0.0);
        assert!(trend[1] < trend[0]);
    }

    #[test]
    fn test_configured_top_k_reaches_report() {
        let config = AnalyzerConfig {
            top_k: 1,
            ..Default::default()
        };
        let mut engine =
            SessionEngine::with_reply_picker(config, Box::new(FixedReplyPicker)).unwrap();
        engine.submit("this is terrible");
        engine.submit("I hate this");

        let report = engine.report();
        assert!(report.contains("Top negative user messages:"));
        assert!(report.contains("1. "));
        assert!(!report.contains("2. "));
    }

    #[test]
    fn test_report_counts_both_roles() {
        let mut engine = engine();
        engine.submit("where is my parcel");
        let report = engine.report();
        assert!(report.contains("Total messages: 2"));
        assert!(report.contains("User messages: 1"));
    }
}
