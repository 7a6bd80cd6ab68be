use pkg_history::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock HistoryStore keeping the packagesite dump and history in memory
#[derive(Clone)]
pub struct MockHistoryStore {
    packagesite: String,
    pub history: Arc<Mutex<Option<BuildHistory>>>,
    pub save_count: Arc<Mutex<usize>>,
    pub catalog: Arc<Mutex<Option<Catalog>>>,
    pub readme: Arc<Mutex<Option<String>>>,
}

impl MockHistoryStore {
    pub fn new(packagesite: &str, history_json: Option<&str>) -> Self {
        let history = history_json
            .map(|json| serde_json::from_str(json).expect("mock history must be valid JSON"));
        Self {
            packagesite: packagesite.to_string(),
            history: Arc::new(Mutex::new(history)),
            save_count: Arc::new(Mutex::new(0)),
            catalog: Arc::new(Mutex::new(None)),
            readme: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_readme(self, content: &str) -> Self {
        *self.readme.lock().unwrap() = Some(content.to_string());
        self
    }

    pub fn saved_catalog(&self) -> Option<Catalog> {
        self.catalog.lock().unwrap().clone()
    }

    pub fn readme(&self) -> Option<String> {
        self.readme.lock().unwrap().clone()
    }

    pub fn saved_history(&self) -> Option<BuildHistory> {
        self.history.lock().unwrap().clone()
    }

    pub fn saves(&self) -> usize {
        *self.save_count.lock().unwrap()
    }
}

impl HistoryStore for MockHistoryStore {
    fn read_packagesite(&self, _path: &Path) -> Result<String> {
        Ok(self.packagesite.clone())
    }

    fn load_history(&self, path: &Path) -> Result<BuildHistory> {
        self.history.lock().unwrap().clone().ok_or_else(|| {
            HistoryError::FileRead {
                path: path.to_path_buf(),
                details: "not found".to_string(),
            }
            .into()
        })
    }

    fn save_history(&self, _path: &Path, history: &BuildHistory) -> Result<()> {
        *self.history.lock().unwrap() = Some(history.clone());
        *self.save_count.lock().unwrap() += 1;
        Ok(())
    }

    fn save_catalog(&self, _path: &Path, catalog: &Catalog) -> Result<()> {
        *self.catalog.lock().unwrap() = Some(catalog.clone());
        Ok(())
    }

    fn read_readme(&self, path: &Path) -> Result<String> {
        self.readme().ok_or_else(|| {
            HistoryError::FileRead {
                path: path.to_path_buf(),
                details: "not found".to_string(),
            }
            .into()
        })
    }

    fn write_readme(&self, _path: &Path, content: &str) -> Result<()> {
        *self.readme.lock().unwrap() = Some(content.to_string());
        Ok(())
    }
}
