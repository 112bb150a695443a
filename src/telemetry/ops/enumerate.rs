use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Enumerate;

#[derive(Copy, Clone, Debug)]
pub enum Phase { LoadSites, Site, Collection, FetchPage, Extract, Filter, Write }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::LoadSites => "load_sites",
        Phase::Site => "site",
        Phase::Collection => "collection",
        Phase::FetchPage => "fetch_page",
        Phase::Extract => "extract",
        Phase::Filter => "filter",
        Phase::Write => "write",
    }}
    fn span(&self) -> Span { match self {
        Phase::LoadSites => info_span!("load_sites"),
        Phase::Site => info_span!("site"),
        Phase::Collection => info_span!("collection"),
        Phase::FetchPage => info_span!("fetch_page"),
        Phase::Extract => info_span!("extract"),
        Phase::Filter => info_span!("filter"),
        Phase::Write => info_span!("write"),
    }}
}

impl OpMarker for Enumerate {
    const NAME: &'static str = "enumerate";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("enumerate") }
}
