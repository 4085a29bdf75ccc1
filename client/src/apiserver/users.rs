//! User resource client.

use std::time::Duration;

use iam_rest::{RestClient, RestResult};

use crate::meta::{CreateOptions, DeleteOptions, GetOptions, ListOptions, UpdateOptions};
use crate::resources::{User, UserList};

const RESOURCE: &str = "users";

/// Typed operations on User resources.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a RestClient,
}

impl<'a> Users<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Create a user. Returns the server's representation of the user.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error from the server.
    pub async fn create(&self, user: &User, opts: &CreateOptions) -> RestResult<User> {
        self.client
            .post()
            .resource(RESOURCE)
            .versioned_params(opts)
            .body(user)
            .send()
            .await?
            .decode()
    }

    /// Update a user, addressed by the name in its metadata.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request error if the user carries no name, or any
    /// transport or API error from the server.
    pub async fn update(&self, user: &User, opts: &UpdateOptions) -> RestResult<User> {
        self.client
            .put()
            .resource(RESOURCE)
            .name(&user.meta.name)
            .versioned_params(opts)
            .body(user)
            .send()
            .await?
            .decode()
    }

    /// Delete the named user.
    ///
    /// # Errors
    ///
    /// Returns `RestError::NotFound` if no such user exists.
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

    /// Delete every user matching the list options.
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

    /// Fetch the named user.
    ///
    /// # Errors
    ///
    /// Returns `RestError::NotFound` if no such user exists.
    pub async fn get(&self, name: &str, opts: &GetOptions) -> RestResult<User> {
        self.client
            .get()
            .resource(RESOURCE)
            .name(name)
            .versioned_params(opts)
            .send()
            .await?
            .decode()
    }

    /// List users matching the given selectors.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error from the server.
    pub async fn list(&self, opts: &ListOptions) -> RestResult<UserList> {
        let mut request = self.client.get().resource(RESOURCE).versioned_params(opts);

        if let Some(secs) = opts.timeout_seconds {
            request = request.timeout(Duration::from_secs(secs));
        }

        request.send().await?.decode()
    }
}
