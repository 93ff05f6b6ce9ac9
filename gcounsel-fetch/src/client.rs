//! Ensembl / mygene.info client implementation.
//!
//! This module provides the [`GeneClient`] type and its builder for querying gene
//! metadata, gene function summaries and variant-overlap records.

use std::time::Duration;

use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;

use gcounsel_core::errors::{Upstream, UpstreamError};
use gcounsel_core::models::{GeneFunction, GeneMetadata, Lookup, RawVariant};

use super::consts::{DEFAULT_SPECIES, MYGENE_FIELDS, USER_AGENT};
use super::errors::FetchError;
use super::parse::{parse_gene_function, parse_gene_lookup, parse_variant_overlap};
use super::source::GeneSource;
use super::utils::{get_default_ensembl_api, get_default_mygene_api};

/// Builder for constructing a [`GeneClient`] with custom configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use gcounsel_fetch::client::GeneClient;
///
/// # fn main() -> Result<(), gcounsel_fetch::FetchError> {
/// let client = GeneClient::builder()
///     .with_ensembl_api("https://grch37.rest.ensembl.org".to_string())
///     .with_species("homo_sapiens".to_string())
///     .finish()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct GeneClientBuilder {
    ensembl_api: Option<String>,
    mygene_api: Option<String>,
    species: Option<String>,
    timeout: Option<Duration>,
}

impl GeneClientBuilder {
    /// Creates a new, empty GeneClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Ensembl REST endpoint.
    pub fn with_ensembl_api(mut self, api: String) -> Self {
        self.ensembl_api = Some(api);
        self
    }

    /// Sets the mygene.info endpoint.
    pub fn with_mygene_api(mut self, api: String) -> Self {
        self.mygene_api = Some(api);
        self
    }

    /// Sets the species used for Ensembl symbol lookups.
    pub fn with_species(mut self, species: String) -> Self {
        self.species = Some(species);
        self
    }

    /// Overrides the HTTP client's default request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Consumes the builder and creates a GeneClient.
    pub fn finish(self) -> Result<GeneClient, FetchError> {
        let ensembl_api = self.ensembl_api.unwrap_or_else(get_default_ensembl_api);
        let mygene_api = self.mygene_api.unwrap_or_else(get_default_mygene_api);

        // validate endpoints up front rather than on every request
        let ensembl_api =
            Url::parse(&ensembl_api).map_err(|_| FetchError::InvalidEndpoint(ensembl_api))?;
        let mygene_api =
            Url::parse(&mygene_api).map_err(|_| FetchError::InvalidEndpoint(mygene_api))?;
        if ensembl_api.cannot_be_a_base() {
            return Err(FetchError::InvalidEndpoint(ensembl_api.to_string()));
        }
        if mygene_api.cannot_be_a_base() {
            return Err(FetchError::InvalidEndpoint(mygene_api.to_string()));
        }

        let mut http = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(GeneClient {
            http: http.build()?,
            ensembl_api,
            mygene_api,
            species: self.species.unwrap_or_else(|| DEFAULT_SPECIES.to_string()),
        })
    }
}

/// Client for the Ensembl and mygene.info REST APIs.
///
/// Every call is a single blocking round trip. Failures never panic or abort: they come
/// back as [`Lookup::NotFound`] / [`Lookup::Failed`] so that callers can carry on with
/// the next gene.
///
/// # Examples
///
/// ```rust,no_run
/// use gcounsel_fetch::client::GeneClient;
/// use gcounsel_fetch::source::GeneSource;
///
/// # fn main() -> Result<(), gcounsel_fetch::FetchError> {
/// let client = GeneClient::builder().finish()?;
///
/// if let Some(meta) = client.lookup_gene("BRCA1").found() {
///     println!("{} is {}", meta.symbol(), meta.stable_id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct GeneClient {
    http: Client,
    /// Ensembl REST endpoint
    pub ensembl_api: Url,
    /// mygene.info endpoint
    pub mygene_api: Url,
    /// Species segment for symbol lookups, e.g. `homo_sapiens`
    pub species: String,
}

impl GeneClient {
    /// Creates a new builder for constructing a [`GeneClient`].
    pub fn builder() -> GeneClientBuilder {
        GeneClientBuilder::default()
    }

    /// Ensembl symbol lookup URL for `name`.
    pub fn lookup_url(&self, name: &str) -> Url {
        let mut url = endpoint(&self.ensembl_api, &["lookup", "symbol", &self.species, name]);
        url.query_pairs_mut()
            .append_pair("content-type", "application/json");
        url
    }

    /// Ensembl variant-overlap URL for a stable gene id.
    pub fn overlap_url(&self, gene_id: &str) -> Url {
        let mut url = endpoint(&self.ensembl_api, &["overlap", "id", gene_id]);
        url.query_pairs_mut()
            .append_pair("feature", "variation")
            .append_pair("content-type", "application/json");
        url
    }

    /// mygene.info query URL for `name`.
    pub fn function_url(&self, name: &str) -> Url {
        let mut url = endpoint(&self.mygene_api, &["v3", "query"]);
        url.query_pairs_mut()
            .append_pair("q", name)
            .append_pair("fields", MYGENE_FIELDS);
        url
    }

    fn get(&self, url: Url, upstream: Upstream) -> Result<Response, UpstreamError> {
        debug!("GET {}", url);
        self.http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| UpstreamError::new(upstream, None, e.to_string()))
    }
}

impl GeneSource for GeneClient {
    fn lookup_gene(&self, name: &str) -> Lookup<GeneMetadata> {
        let response = match self.get(self.lookup_url(name), Upstream::Ensembl) {
            Ok(response) => response,
            Err(err) => return Lookup::Failed(err),
        };

        // Ensembl answers 400 for unknown symbols
        if matches!(
            response.status(),
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND
        ) {
            warn!("Gene information not found for {}", name);
            return Lookup::NotFound;
        }

        match read_body(response, Upstream::Ensembl).and_then(|body| {
            parse_gene_lookup(&body)
                .map_err(|e| UpstreamError::new(Upstream::Ensembl, None, e.to_string()))
        }) {
            Ok(meta) => Lookup::Found(meta),
            Err(err) => {
                warn!("Error fetching data from Ensembl for gene {}: {}", name, err);
                Lookup::Failed(err)
            }
        }
    }

    fn lookup_function(&self, name: &str) -> Lookup<GeneFunction> {
        let body = self
            .get(self.function_url(name), Upstream::MyGene)
            .and_then(|response| read_body(response, Upstream::MyGene));

        let body = match body {
            Ok(body) => body,
            Err(err) => {
                warn!("Error fetching gene function for {}: {}", name, err);
                return Lookup::Failed(err);
            }
        };

        match parse_gene_function(&body) {
            Ok(Some(function)) => Lookup::Found(function),
            Ok(None) => {
                warn!("No gene function hits for {}", name);
                Lookup::NotFound
            }
            Err(e) => Lookup::Failed(UpstreamError::new(Upstream::MyGene, None, e.to_string())),
        }
    }

    fn lookup_variants(&self, gene_id: &str) -> Result<Vec<RawVariant>, UpstreamError> {
        let response = self.get(self.overlap_url(gene_id), Upstream::Ensembl)?;
        let body = read_body(response, Upstream::Ensembl)?;
        let records = parse_variant_overlap(&body)
            .map_err(|e| UpstreamError::new(Upstream::Ensembl, None, e.to_string()))?;
        debug!("Received {} variant records for {}", records.len(), gene_id);
        Ok(records)
    }
}

/// Append path segments to a base URL, tolerating a trailing slash on the base.
fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// Body of a successful response; any other status becomes an [`UpstreamError`].
fn read_body(response: Response, upstream: Upstream) -> Result<String, UpstreamError> {
    let status = response.status();
    let body = response
        .text()
        .map_err(|e| UpstreamError::new(upstream, Some(status.as_u16()), e.to_string()))?;

    if !status.is_success() {
        return Err(UpstreamError::new(
            upstream,
            Some(status.as_u16()),
            body.chars().take(200).collect::<String>(),
        ));
    }
    Ok(body)
}
