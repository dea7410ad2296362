//! Employee files API.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde::de::IgnoredAny;

use crate::client::{BambooClient, path_segment};
use crate::error::{Error, Result};
use crate::types::{EmployeeCategory, EmployeeFilesResponse};

/// Employee files API client.
pub struct FilesApi {
    client: BambooClient,
}

impl FilesApi {
    pub(crate) fn new(client: BambooClient) -> Self {
        Self { client }
    }

    /// List an employee's file categories and the files in each.
    pub async fn list(&self, employee_id: &str) -> Result<Vec<EmployeeCategory>> {
        Ok(self.view(employee_id).await?.categories)
    }

    /// Get the full files view, including the employee ID echoed back.
    pub async fn view(&self, employee_id: &str) -> Result<EmployeeFilesResponse> {
        let url = self.client.url([
            "employees",
            path_segment(employee_id)?,
            "files",
            "view",
            "",
        ])?;
        let response: Option<EmployeeFilesResponse> =
            self.client.execute(self.client.http().get(url)).await?;
        Ok(response.unwrap_or_default())
    }

    /// Upload a local file into one of an employee's file categories.
    ///
    /// IDs are strings throughout because the service is inconsistent about
    /// whether it wants them numeric. `share` is sent as given (the service
    /// expects `"yes"` or `"no"`). The file is read fully before anything is
    /// sent.
    pub async fn upload(
        &self,
        employee_id: &str,
        category_id: &str,
        file_name: &str,
        file_path: impl AsRef<Path>,
        share: &str,
    ) -> Result<()> {
        let url = self
            .client
            .url(["employees", path_segment(employee_id)?, "files", ""])?;

        let file_path = file_path.as_ref();
        let data = tokio::fs::read(file_path).await.map_err(|source| Error::Io {
            path: file_path.to_path_buf(),
            source,
        })?;
        let base_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let file = Part::bytes(data)
            .file_name(base_name)
            .mime_str("application/octet-stream")?;
        let form = Form::new()
            .text("category", category_id.to_string())
            .text("fileName", file_name.to_string())
            .text("share", share.to_string())
            .part("file", file);

        let _: Option<IgnoredAny> = self
            .client
            .execute(self.client.http().post(url).multipart(form))
            .await?;
        Ok(())
    }
}
