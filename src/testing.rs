//! In-memory fake adapters shared by unit tests.
//!
//! Each fake records the calls made against it so tests can assert on
//! ordering and arity without touching git, an editor, or the disk.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::context::ServiceContext;
use crate::ports::editor::{DocumentHandle, EditorHost, Selection};
use crate::ports::filesystem::FileSystem;
use crate::ports::state::StateStore;
use crate::ports::vcs::VersionControl;
use crate::ports::PortError;

/// Builds a context from the given fakes.
pub fn context_with(vcs: FakeVcs, editor: FakeEditor, fs: MemFs) -> ServiceContext {
    ServiceContext {
        vcs: Box::new(vcs),
        editor: Box::new(editor),
        fs: Box::new(fs),
        state: Box::new(MemState::default()),
    }
}

/// Builds a context with all-default fakes.
pub fn test_context() -> ServiceContext {
    context_with(FakeVcs::default(), FakeEditor::default(), MemFs::default())
}

// --- Version control ---

#[derive(Default)]
struct FakeVcsInner {
    calls: Vec<String>,
    remote: Option<String>,
    fail_checkout: bool,
    fail_create: bool,
    fail_clone: bool,
}

/// Scripted version-control fake recording every call.
#[derive(Clone, Default)]
pub struct FakeVcs {
    inner: Arc<Mutex<FakeVcsInner>>,
}

impl FakeVcs {
    /// A fake whose repository reports the given remote URL.
    pub fn with_remote(remote: &str) -> Self {
        let fake = Self::default();
        fake.inner.lock().unwrap().remote = Some(remote.to_string());
        fake
    }

    /// Makes `checkout` fail, as for a branch that does not exist.
    pub fn fail_checkout(&self) {
        self.inner.lock().unwrap().fail_checkout = true;
    }

    /// Makes `create_and_checkout_branch` fail.
    pub fn fail_create(&self) {
        self.inner.lock().unwrap().fail_create = true;
    }

    /// Makes `clone_repo` fail.
    pub fn fail_clone(&self) {
        self.inner.lock().unwrap().fail_clone = true;
    }

    /// The calls made so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }
}

impl VersionControl for FakeVcs {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), PortError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(format!("clone {url} {}", dest.display()));
        if inner.fail_clone {
            return Err("fatal: could not read from remote repository".into());
        }
        Ok(())
    }

    fn remote_url(&self, dir: &Path) -> Result<String, PortError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(format!("remote_url {}", dir.display()));
        inner.remote.clone().ok_or_else(|| "no remote configured".into())
    }

    fn checkout(&self, _dir: &Path, branch: &str) -> Result<(), PortError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(format!("checkout {branch}"));
        if inner.fail_checkout {
            return Err(format!("error: pathspec '{branch}' did not match").into());
        }
        Ok(())
    }

    fn create_and_checkout_branch(&self, _dir: &Path, branch: &str) -> Result<(), PortError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(format!("create_and_checkout {branch}"));
        if inner.fail_create {
            return Err(format!("fatal: a branch named '{branch}' already exists").into());
        }
        Ok(())
    }
}

// --- Editor ---

#[derive(Default)]
struct FakeEditorInner {
    calls: Vec<String>,
    infos: Vec<String>,
    errors: Vec<String>,
}

/// Editor fake recording folder/document calls and notifications.
#[derive(Clone, Default)]
pub struct FakeEditor {
    inner: Arc<Mutex<FakeEditorInner>>,
}

impl FakeEditor {
    /// The editor calls made so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Informational notifications shown so far.
    pub fn infos(&self) -> Vec<String> {
        self.inner.lock().unwrap().infos.clone()
    }

    /// Error notifications shown so far.
    pub fn errors(&self) -> Vec<String> {
        self.inner.lock().unwrap().errors.clone()
    }
}

impl EditorHost for FakeEditor {
    fn open_folder(&self, path: &Path) -> Result<(), PortError> {
        self.inner.lock().unwrap().calls.push(format!("open_folder {}", path.display()));
        Ok(())
    }

    fn open_document(&self, path: &Path) -> Result<DocumentHandle, PortError> {
        self.inner.lock().unwrap().calls.push(format!("open_document {}", path.display()));
        Ok(DocumentHandle { path: path.to_path_buf() })
    }

    fn show_document(
        &self,
        document: &DocumentHandle,
        selection: Option<Selection>,
    ) -> Result<(), PortError> {
        let suffix = selection
            .map_or_else(|| "no selection".to_string(), |s| format!("line {}", s.start_line));
        self.inner
            .lock()
            .unwrap()
            .calls
            .push(format!("show_document {} {suffix}", document.path.display()));
        Ok(())
    }

    fn notify_info(&self, message: &str) {
        self.inner.lock().unwrap().infos.push(message.to_string());
    }

    fn notify_error(&self, message: &str) {
        self.inner.lock().unwrap().errors.push(message.to_string());
    }
}

// --- Filesystem ---

/// In-memory filesystem tracking which paths exist.
#[derive(Clone, Default)]
pub struct MemFs {
    existing: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MemFs {
    /// Marks a path as existing.
    pub fn add(&self, path: &str) {
        self.existing.lock().unwrap().insert(PathBuf::from(path));
    }

    /// Returns `true` if the path was added or created.
    pub fn exists_path(&self, path: &str) -> bool {
        self.existing.lock().unwrap().contains(Path::new(path))
    }
}

impl FileSystem for MemFs {
    fn exists(&self, path: &Path) -> bool {
        self.existing.lock().unwrap().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), PortError> {
        let mut existing = self.existing.lock().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            existing.insert(current.clone());
        }
        Ok(())
    }
}

// --- State store ---

/// In-memory key-value store.
#[derive(Clone, Default)]
pub struct MemState {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl StateStore for MemState {
    fn get(&self, key: &str) -> Result<Option<String>, PortError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortError> {
        self.values.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), PortError> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}
