//! Employees API.

use crate::client::{BambooClient, path_segment};
use crate::error::Result;
use crate::fields::{EmployeeField, EmployeeFields};
use crate::types::{Employee, EmployeeDirectory};

/// Employees API client.
pub struct EmployeesApi {
    client: BambooClient,
}

impl EmployeesApi {
    pub(crate) fn new(client: BambooClient) -> Self {
        Self { client }
    }

    /// List every employee in the company directory.
    pub async fn directory(&self) -> Result<Vec<Employee>> {
        let url = self.client.url(["employees", "directory"])?;
        let response: Option<EmployeeDirectory> =
            self.client.execute(self.client.http().get(url)).await?;
        Ok(response.map(|d| d.employees).unwrap_or_default())
    }

    /// Get one employee by ID with the requested fields.
    ///
    /// An empty `fields` slice requests every field in
    /// [`EmployeeField::ALL`] order. Unlike the directory, the service
    /// returns the employee object unwrapped here.
    pub async fn get(&self, id: &str, fields: &[EmployeeField]) -> Result<Employee> {
        let url = self.client.url(["employees", path_segment(id)?])?;
        let fields = EmployeeFields::or_all(fields).join(",");
        let request = self.client.http().get(url).query(&[("fields", fields)]);
        let employee: Option<Employee> = self.client.execute(request).await?;
        Ok(employee.unwrap_or_default())
    }

    /// Get one employee with every known field.
    pub async fn get_all_fields(&self, id: &str) -> Result<Employee> {
        self.get(id, &[]).await
    }
}
