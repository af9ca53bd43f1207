//! Keyword-based intent detection.

use convo_types::message::Intent;

/// Ordered keyword table. Order is the tie-break: when a text matches
/// keywords from several categories, the first category here wins.
const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::Billing,
        &["bill", "billing", "charge", "charged", "invoice", "payment"],
    ),
    (
        Intent::Refund,
        &["refund", "refunds", "return", "money back", "replace", "exchange"],
    ),
    (
        Intent::Delivery,
        &["delivery", "delivered", "shipping", "courier", "track", "tracking", "late"],
    ),
    (
        Intent::Technical,
        &["broken", "not working", "error", "bug", "crash", "slow", "issue"],
    ),
    (
        Intent::Account,
        &["login", "password", "account", "profile", "signup", "sign up"],
    ),
];

/// Return the first intent whose any keyword substring-matches the
/// lowercased text; `Other` when nothing matches or the text is empty.
pub fn detect_intent(text: &str) -> Intent {
    if text.is_empty() {
        return Intent::Other;
    }

    let lower = text.to_lowercase();
    for (intent, keywords) in INTENT_KEYWORDS {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return *intent;
        }
    }
    Intent::Other
}
