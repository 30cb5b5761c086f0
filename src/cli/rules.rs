//! Rules command implementation

use sagx::intent::IntentRouter;

/// Print the routing table in evaluation order
pub fn rules_command() {
    let router = IntentRouter::default();

    println!("Rules ({}), first match wins:\n", router.rules().len());

    for (i, rule) in router.rules().iter().enumerate() {
        println!(
            "  {}. {:<12} {:<42} -> {}",
            i + 1,
            rule.name,
            rule.describe,
            rule.intent
        );
    }
}
