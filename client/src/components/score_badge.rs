//! Colored percentage badge for a single score.

use leptos::prelude::*;

use crate::mock::ScoreBand;

/// Which way a score reads: risk scores are bad when high, quality when low.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreKind {
    Risk,
    Quality,
}

#[component]
pub fn ScoreBadge(score: u8, kind: ScoreKind) -> impl IntoView {
    let band = match kind {
        ScoreKind::Risk => ScoreBand::for_risk(score),
        ScoreKind::Quality => ScoreBand::for_quality(score),
    };
    view! {
        <span class=band.css_class() title=band.label()>
            {format!("{score}%")}
        </span>
    }
}
