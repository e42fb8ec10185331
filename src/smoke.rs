//! Fixed smoke checks against the PBDB data service.
//!
//! Each check calls one endpoint, prints the request, status and a body
//! preview, then the key names and record count. Checks run one after
//! another and the first failure stops the run.

use std::io::Write;

use tracing::info;

use crate::client::ApiCaller;
use crate::clients::intervals::INTERVALS_LIST;
use crate::clients::occurrences::OCCS_LIST;
use crate::clients::taxa::{TAXA_LIST, TAXA_SINGLE};
use crate::clients::{OccurrencesClient, TaxaClient};
use crate::error::Error;
use crate::params::{join_show, QueryParams};
use crate::report;
use crate::types::{ApiResponse, ResponseSummary};

/// One endpoint call with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SmokeCheck {
    /// Short label used in logs
    pub name: &'static str,
    /// Endpoint path segment, e.g. `taxa/list`
    pub endpoint: &'static str,
    pub params: QueryParams,
}

/// Taxon lookup: Tyrannosaurus and all its children.
#[must_use]
pub fn taxa_check() -> SmokeCheck {
    SmokeCheck {
        name: "taxa",
        endpoint: TAXA_LIST,
        params: TaxaClient::list_params(
            "Tyrannosaurus",
            Some("all_children"),
            &["attr", "app", "size", "class"],
        ),
    }
}

/// Occurrence lookup: five Tyrannosaurus occurrences with locality data.
#[must_use]
pub fn occurrences_check() -> SmokeCheck {
    SmokeCheck {
        name: "occurrences",
        endpoint: OCCS_LIST,
        params: OccurrencesClient::list_params(
            "Tyrannosaurus",
            &["coords", "loc", "paleoloc", "stratext"],
            Some(5),
        ),
    }
}

/// Interval lookup: the Cretaceous.
#[must_use]
pub fn interval_check() -> SmokeCheck {
    SmokeCheck {
        name: "interval",
        endpoint: INTERVALS_LIST,
        params: QueryParams::new().with("name", "Cretaceous"),
    }
}

/// Taxon detail lookup by PBDB identifier.
#[must_use]
pub fn taxon_detail_check(id: &str) -> SmokeCheck {
    SmokeCheck {
        name: "taxon_detail",
        endpoint: TAXA_SINGLE,
        params: QueryParams::new()
            .with("id", id)
            .with("show", join_show(&["attr", "app", "size", "class"])),
    }
}

/// The three checks, in run order.
#[must_use]
pub fn default_checks() -> Vec<SmokeCheck> {
    vec![taxa_check(), occurrences_check(), interval_check()]
}

/// Run one check, writing diagnostics to `out`.
///
/// # Errors
///
/// Propagates any call failure unchanged. The request lines, and the status
/// line when a response arrived, have already been written by then.
pub async fn run_check<C, W>(caller: &C, check: &SmokeCheck, out: &mut W) -> Result<ResponseSummary, Error>
where
    C: ApiCaller + ?Sized,
    W: Write,
{
    Ok(execute_check(caller, check, out).await?.summary())
}

async fn execute_check<C, W>(caller: &C, check: &SmokeCheck, out: &mut W) -> Result<ApiResponse, Error>
where
    C: ApiCaller + ?Sized,
    W: Write,
{
    let url = caller.endpoint_url(check.endpoint)?;
    report::write_request(out, &url, &check.params)?;

    let raw = caller.fetch(check.endpoint, &check.params).await?;
    report::write_status(out, raw.status)?;

    let response = raw.decode()?;
    report::write_preview(out, &response.body)?;

    let summary = response.summary();
    report::write_summary(out, &summary)?;

    info!(
        check = check.name,
        status = response.status,
        records = summary.record_count,
        "Smoke check passed"
    );
    Ok(response)
}

/// Taxon lookup followed by a `taxa/single` lookup of its first record.
///
/// Returns `None` for the detail step when the list had no record id to
/// follow; a note is written instead.
///
/// # Errors
///
/// Returns the first failure of either call.
pub async fn run_taxon_detail<C, W>(
    caller: &C,
    out: &mut W,
) -> Result<(ResponseSummary, Option<ResponseSummary>), Error>
where
    C: ApiCaller + ?Sized,
    W: Write,
{
    let listing = execute_check(caller, &taxa_check(), out).await?;

    let detail = match listing.first_record_id() {
        Some(id) => {
            writeln!(out, "Using taxon ID: {id}")?;
            Some(run_check(caller, &taxon_detail_check(&id), out).await?)
        }
        None => {
            writeln!(out, "No taxon ID found in taxon lookup, skipping detail lookup.")?;
            None
        }
    };

    Ok((listing.summary(), detail))
}

/// Run `checks` in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first error; later checks are not attempted.
pub async fn run_all<C, W>(
    caller: &C,
    checks: &[SmokeCheck],
    out: &mut W,
) -> Result<Vec<ResponseSummary>, Error>
where
    C: ApiCaller + ?Sized,
    W: Write,
{
    let mut summaries = Vec::with_capacity(checks.len());
    for check in checks {
        summaries.push(run_check(caller, check, out).await?);
    }
    Ok(summaries)
}
