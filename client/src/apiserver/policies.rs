//! Policy resource client.

use std::time::Duration;

use iam_rest::{RestClient, RestResult};

use crate::meta::{CreateOptions, DeleteOptions, GetOptions, ListOptions, UpdateOptions};
use crate::resources::{Policy, PolicyList};

const RESOURCE: &str = "policies";

/// Typed operations on Policy resources.
#[derive(Debug, Clone, Copy)]
pub struct Policies<'a> {
    client: &'a RestClient,
}

impl<'a> Policies<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Create a policy. Returns the server's representation of the policy.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error from the server.
    pub async fn create(&self, policy: &Policy, opts: &CreateOptions) -> RestResult<Policy> {
        self.client
            .post()
            .resource(RESOURCE)
            .versioned_params(opts)
            .body(policy)
            .send()
            .await?
            .decode()
    }

    /// Update a policy, addressed by the name in its metadata.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error from the server.
    pub async fn update(&self, policy: &Policy, opts: &UpdateOptions) -> RestResult<Policy> {
        self.client
            .put()
            .resource(RESOURCE)
            .name(&policy.meta.name)
            .versioned_params(opts)
            .body(policy)
            .send()
            .await?
            .decode()
    }

    /// Delete the named policy.
    ///
    /// # Errors
    ///
    /// Returns `RestError::NotFound` if no such policy exists.
    pub async fn delete(&self, name: &str, opts: &DeleteOptions) -> RestResult<()> {
        self.client
            .delete()
            .resource(RESOURCE)
            .name(name)
            .body(opts)
            .send()
            .await?;

        Ok(())
    }

    /// Delete every policy matching the list options.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error from the server.
    pub async fn delete_collection(
        &self,
        opts: &DeleteOptions,
        list_opts: &ListOptions,
    ) -> RestResult<()> {
        let mut request = self
            .client
            .delete()
            .resource(RESOURCE)
            .versioned_params(list_opts);

        if let Some(secs) = list_opts.timeout_seconds {
            request = request.timeout(Duration::from_secs(secs));
        }

        request.body(opts).send().await?;
        Ok(())
    }

    /// Fetch the named policy.
    ///
    /// # Errors
    ///
    /// Returns `RestError::NotFound` if no such policy exists.
    pub async fn get(&self, name: &str, opts: &GetOptions) -> RestResult<Policy> {
        self.client
            .get()
            .resource(RESOURCE)
            .name(name)
            .versioned_params(opts)
            .send()
            .await?
            .decode()
    }

    /// List policies matching the given selectors.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error from the server.
    pub async fn list(&self, opts: &ListOptions) -> RestResult<PolicyList> {
        let mut request = self.client.get().resource(RESOURCE).versioned_params(opts);

        if let Some(secs) = opts.timeout_seconds {
            request = request.timeout(Duration::from_secs(secs));
        }

        request.send().await?.decode()
    }
}
