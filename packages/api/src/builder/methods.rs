//! Terminal methods running a `PathQuery` against a root value

use deepget_core::Resolved;
use serde_json::Value;

use super::core::PathQuery;
use crate::error::QueryResult;

impl PathQuery {
    /// Resolve against `root`, returning the default when any segment is absent
    ///
    /// An invalid separator resolves nothing and returns the default.
    #[must_use]
    pub fn get(&self, root: &Value) -> Option<Value> {
        self.get_opt(Some(root))
    }

    /// Resolve against a root that may itself be absent
    #[must_use]
    pub fn get_opt(&self, root: Option<&Value>) -> Option<Value> {
        match self.accessor() {
            Ok(accessor) => {
                let Some(root) = root else {
                    return self.default.clone();
                };
                accessor.lookup(root, &self.path).or_default(self.default.clone())
            }
            Err(error) => {
                tracing::warn!(path = %self.path, %error, "query separator rejected, returning default");
                self.default.clone()
            }
        }
    }

    /// Resolve against `root`, keeping a stored `null` distinct from missing
    ///
    /// The default is not consulted.
    #[must_use]
    pub fn lookup<'a>(&self, root: &'a Value) -> Resolved<'a> {
        match self.accessor() {
            Ok(accessor) => accessor.lookup(root, &self.path),
            Err(error) => {
                tracing::warn!(path = %self.path, %error, "query separator rejected");
                Resolved::Missing
            }
        }
    }

    /// Resolve against `root`, reporting why resolution failed
    ///
    /// # Errors
    ///
    /// - `QueryError::Config` if the separator is whitespace or a control character
    /// - `QueryError::Path` describing the first segment that could not be resolved
    pub fn try_get(&self, root: &Value) -> QueryResult<Value> {
        let accessor = self.accessor()?;
        Ok(accessor.try_resolve(root, &self.path)?.into_owned())
    }
}
