use komento_api::{AppData, Error};

/// One-time GET of the seed document. Awaited before any rendering or
/// mutation; any transport or decode failure is a fatal, non-retryable
/// `DataLoad` (the caller shows a blocking notice and stops).
pub async fn fetch_app_data(url: &str) -> Result<AppData, Error> {
    let res = reqwest::Client::new()
        .get(url)
        .send()
        .await
        .and_then(|res| res.error_for_status())
        .map_err(|e| Error::DataLoad(e.to_string()))?;
    res.json().await.map_err(|e| Error::DataLoad(e.to_string()))
}
