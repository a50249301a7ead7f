use ribbons_core::{DatasetSource, SankeyDataset};
use url::Url;

pub const ENERGY_SANKEY_URL: &str =
    "https://raw.githubusercontent.com/plotly/plotly.js/master/test/image/mocks/sankey_energy.json";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid dataset URL: {0}")]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Dataset(#[from] ribbons_core::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;

/// A Sankey dataset served over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
}

impl HttpSource {
    pub fn new(url: &str) -> Result<Self> {
        Ok(Self {
            url: Url::parse(url)?,
        })
    }

    /// plotly's energy forecast mock.
    pub fn energy() -> Result<Self> {
        Self::new(ENERGY_SANKEY_URL)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Performs one blocking GET and parses the body. No timeout, retry, or fallback.
    pub fn fetch(&self) -> Result<SankeyDataset> {
        tracing::info!(url = %self.url, "fetching sankey dataset");
        // The blocking client otherwise gives up after 30s.
        let client = reqwest::blocking::Client::builder().timeout(None).build()?;
        let response = client.get(self.url.clone()).send()?.error_for_status()?;
        let body = response.text()?;
        tracing::debug!(bytes = body.len(), "sankey dataset downloaded");
        Ok(SankeyDataset::from_json(&body)?)
    }
}

impl DatasetSource for HttpSource {
    type Error = FetchError;

    fn load(&self) -> Result<SankeyDataset> {
        self.fetch()
    }
}

/// Loads a Sankey dataset from `url`. Note: this performs a network request.
pub fn load_sankey_dataset(url: &str) -> Result<SankeyDataset> {
    HttpSource::new(url)?.fetch()
}

/// Loads plotly's energy Sankey mock. Note: this performs a network request.
pub fn load_energy_sankey_data() -> Result<SankeyDataset> {
    load_sankey_dataset(ENERGY_SANKEY_URL)
}
