//! Password validator - final decision and full-evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::rules::RULES;
use crate::types::{Evaluation, RuleOutcome, Tier};

/// Decides whether a password satisfies every rule.
///
/// Rules run in decision order, the baseline tier first; evaluation stops at
/// the first failure. Returns `true` only if all eleven rules pass.
pub fn is_valid(password: &SecretString) -> bool {
    let pwd = password.expose_secret();
    RULES.iter().all(|rule| rule.check(pwd))
}

/// Evaluates every rule against the password, without short-circuiting.
///
/// Outcomes are reported in rule-definition order, one per rule, for driving
/// a requirements checklist. The score counts passing baseline rules only;
/// `accepted` is the short-circuit decision, computed independently of the
/// outcome list.
pub fn evaluate_all(password: &SecretString) -> Evaluation {
    let pwd = password.expose_secret();

    let checks: Vec<RuleOutcome> = RULES
        .iter()
        .map(|rule| RuleOutcome {
            name: rule.name,
            label: rule.label,
            tier: rule.tier,
            passed: rule.check(pwd),
        })
        .collect();

    let score = checks
        .iter()
        .filter(|outcome| outcome.tier == Tier::Baseline && outcome.passed)
        .count() as u8;

    Evaluation {
        accepted: is_valid(password),
        score,
        checks,
    }
}

/// Debounced live evaluation that sends its result via channel.
///
/// Waits a short window before evaluating; cancelling the token inside that
/// window drops the evaluation entirely, so a caller re-triggering on every
/// keystroke can discard superseded runs. Cancellation only suppresses
/// delivery, it never changes what [`evaluate_all`] returns.
#[cfg(feature = "async")]
pub async fn evaluate_all_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Evaluation>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("live evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("live evaluation superseded, dropping result");
        return;
    }

    let evaluation = evaluate_all(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use serial_test::serial;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test]
    #[serial]
    async fn test_evaluate_all_tx_delivers_result() {
        crate::denylist::reset_denylist_for_testing();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let password = secret("StrongPass1!");
        evaluate_all_tx(&password, token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert!(evaluation.accepted);
        assert_eq!(evaluation.score, crate::types::MAX_SCORE);
    }

    #[tokio::test]
    #[serial]
    async fn test_evaluate_all_tx_cancelled_drops_result() {
        crate::denylist::reset_denylist_for_testing();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let password = secret("StrongPass1!");
        evaluate_all_tx(&password, token, tx).await;

        assert!(rx.recv().await.is_none());
    }
}
