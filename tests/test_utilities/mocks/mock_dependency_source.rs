use nuget_depgraph::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock DependencySource that counts lookups per package
///
/// Unknown packages fail, like an unreachable feed entry, unless they were
/// registered with `with_package`.
#[derive(Default, Clone)]
pub struct MockDependencySource {
    pub packages: HashMap<String, Vec<String>>,
    pub failing: Vec<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockDependencySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, package: &str, dependencies: &[&str]) -> Self {
        self.packages.insert(
            package.to_string(),
            dependencies.iter().map(|d| d.to_string()).collect(),
        );
        self
    }

    pub fn with_failure(mut self, package: &str) -> Self {
        self.failing.push(package.to_string());
        self
    }

    pub fn lookup_count(&self, package: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| *c == package)
            .count()
    }

    pub fn total_lookups(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl DependencySource for MockDependencySource {
    fn lookup(&self, package: &PackageId) -> std::result::Result<Vec<PackageId>, LookupError> {
        self.calls.lock().unwrap().push(package.to_string());

        if self.failing.iter().any(|f| f == package.as_str()) {
            return Err(LookupError::new(
                package,
                anyhow::anyhow!("Mock dependency source failure"),
            ));
        }

        let dependencies = self
            .packages
            .get(package.as_str())
            .ok_or_else(|| LookupError::new(package, anyhow::anyhow!("unknown package")))?;

        dependencies
            .iter()
            .map(|d| PackageId::new(d.as_str()).map_err(|e| LookupError::new(package, e)))
            .collect()
    }
}
