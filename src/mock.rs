//! In-memory logger for tests
//!
//! [`MockLogger`] implements [`Logging`] without touching the filesystem or
//! terminating the process. Derived loggers keep a link to their parent; the
//! prefix chain and the fields are collected by walking that link when a line
//! is rendered, and every line is recorded on the root of the chain.
//!
//! Lines look like `[INFO] api.v1 message [a=1 b=2]`: no timestamp, the prefix
//! as a bare dot-joined segment, fields sorted by key.

use crate::core::{
    Config, ExitHook, FieldValue, Fields, LogLevel, Logging, Result, SharedLogger,
};
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

/// Recording logger with an injectable exit handler
///
/// # Example
///
/// ```
/// use rust_leveled_logger::prelude::*;
///
/// let mock = MockLogger::new();
/// mock.with_prefix("api").with_fields(Fields::from([("id".to_string(), 7.into())])).info("ok");
/// assert_eq!(mock.messages(), vec!["[INFO] api ok [id=7]".to_string()]);
/// ```
#[derive(Clone)]
pub struct MockLogger {
    node: Arc<MockNode>,
}

struct MockNode {
    level: RwLock<LogLevel>,
    prefix: String,
    fields: Fields,
    parent: Option<Arc<MockNode>>,
    records: Mutex<Vec<String>>,
    exit_handler: RwLock<ExitHook>,
    exit_code: AtomicI32,
    has_file: bool,
}

impl MockNode {
    fn root(&self) -> &MockNode {
        let mut current = self;
        while let Some(parent) = current.parent.as_deref() {
            current = parent;
        }
        current
    }

    fn child(parent: &Arc<MockNode>, prefix: String, fields: Fields, has_file: bool) -> Self {
        Self {
            level: RwLock::new(*parent.level.read()),
            prefix,
            fields,
            parent: Some(Arc::clone(parent)),
            records: Mutex::new(Vec::new()),
            exit_handler: RwLock::new(parent.exit_handler.read().clone()),
            exit_code: AtomicI32::new(0),
            has_file,
        }
    }

    /// Prefix segments root first, and fields with nearer nodes overriding ancestors
    fn collect_chain(&self) -> (Vec<&str>, BTreeMap<&str, &FieldValue>) {
        let mut chain = Vec::new();
        let mut current = Some(self);
        while let Some(node) = current {
            chain.push(node);
            current = node.parent.as_deref();
        }

        let mut prefixes = Vec::new();
        let mut fields = BTreeMap::new();
        for node in chain.into_iter().rev() {
            if !node.prefix.is_empty() {
                prefixes.push(node.prefix.as_str());
            }
            for (key, value) in &node.fields {
                fields.insert(key.as_str(), value);
            }
        }
        (prefixes, fields)
    }

    fn format(&self, level: LogLevel, message: &str) -> String {
        let (prefixes, fields) = self.collect_chain();

        let mut parts = vec![level.tag().to_string()];
        if !prefixes.is_empty() {
            parts.push(prefixes.join("."));
        }
        parts.push(message.to_string());
        if !fields.is_empty() {
            let rendered = fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(" ");
            parts.push(format!("[{}]", rendered));
        }
        parts.join(" ")
    }
}

impl MockLogger {
    /// Root mock at `debug` level with a no-op exit handler
    pub fn new() -> Self {
        Self::from_node(MockNode {
            level: RwLock::new(LogLevel::Debug),
            prefix: String::new(),
            fields: Fields::new(),
            parent: None,
            records: Mutex::new(Vec::new()),
            exit_handler: RwLock::new(Arc::new(|_| {})),
            exit_code: AtomicI32::new(0),
            has_file: false,
        })
    }

    fn from_node(node: MockNode) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// Copy of this node with the same parent; a root copy carries over the recorded lines
    fn clone_node(&self) -> MockNode {
        let node = &self.node;
        MockNode {
            level: RwLock::new(*node.level.read()),
            prefix: node.prefix.clone(),
            fields: node.fields.clone(),
            parent: node.parent.clone(),
            records: Mutex::new(node.records.lock().clone()),
            exit_handler: RwLock::new(node.exit_handler.read().clone()),
            exit_code: AtomicI32::new(node.exit_code.load(Ordering::SeqCst)),
            has_file: node.has_file,
        }
    }

    /// Replace the termination callback used by `fatal` on this node
    ///
    /// Loggers derived afterwards inherit the new handler.
    pub fn set_exit_handler<F>(&self, handler: F)
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        *self.node.exit_handler.write() = Arc::new(handler);
    }

    /// Status passed to the exit handler by the last `fatal` on this node, `0` if none
    pub fn exit_code(&self) -> i32 {
        self.node.exit_code.load(Ordering::SeqCst)
    }

    /// Whether this node was produced by `with_file`
    pub fn has_file(&self) -> bool {
        self.node.has_file
    }

    pub fn level(&self) -> LogLevel {
        *self.node.level.read()
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.is_enabled(level) {
            return;
        }
        let line = self.node.format(level, message);
        self.node.root().records.lock().push(line);
    }

    /// Filtering always consults the root of the chain
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= *self.node.root().level.read()
    }

    pub fn fatal(&self, message: &str) {
        self.log(LogLevel::Fatal, message);
        if let Err(e) = self.close() {
            self.log(LogLevel::Error, &format!("failed to close logger: {}", e));
        }
        self.node.exit_code.store(1, Ordering::SeqCst);
        let handler = self.node.exit_handler.read().clone();
        handler(1);
    }

    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> MockLogger {
        Self::from_node(MockNode::child(
            &self.node,
            prefix.to_string(),
            Fields::new(),
            false,
        ))
    }

    #[must_use]
    pub fn with_fields(&self, fields: Fields) -> MockLogger {
        Self::from_node(MockNode::child(&self.node, String::new(), fields, false))
    }

    /// Only records that a file was requested; nothing is opened
    #[must_use]
    pub fn with_file(&self, _path: impl AsRef<Path>) -> MockLogger {
        Self::from_node(MockNode::child(&self.node, String::new(), Fields::new(), true))
    }

    /// Copy of this node with the named level (`info` if unknown)
    ///
    /// The copy keeps this node's parent, so the level only affects filtering
    /// when this node is a root.
    #[must_use]
    pub fn with_level(&self, level: &str) -> MockLogger {
        let node = self.clone_node();
        *node.level.write() = level.parse().unwrap_or(LogLevel::Info);
        Self::from_node(node)
    }

    /// Returns this same logger; configuration is not modelled
    #[must_use]
    pub fn with_config(&self, _config: &Config) -> MockLogger {
        self.clone()
    }

    /// Copy of this node; timestamps are not rendered by the mock
    #[must_use]
    pub fn with_time_format(&self, _pattern: &str) -> MockLogger {
        Self::from_node(self.clone_node())
    }

    pub fn set_level(&self, level: &str) -> Result<()> {
        let parsed: LogLevel = level.parse()?;
        *self.node.level.write() = parsed;
        Ok(())
    }

    /// Lines recorded on the root of this logger's chain
    pub fn messages(&self) -> Vec<String> {
        self.node.root().records.lock().clone()
    }
}

impl Default for MockLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MockLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockLogger")
            .field("level", &self.level())
            .field("prefix", &self.node.prefix)
            .field("has_parent", &self.node.parent.is_some())
            .field("has_file", &self.node.has_file)
            .finish()
    }
}

impl Logging for MockLogger {
    fn log(&self, level: LogLevel, message: &str) {
        MockLogger::log(self, level, message);
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        MockLogger::is_enabled(self, level)
    }

    fn fatal(&self, message: &str) {
        MockLogger::fatal(self, message);
    }

    fn with_prefix(&self, prefix: &str) -> SharedLogger {
        Arc::new(MockLogger::with_prefix(self, prefix))
    }

    fn with_fields(&self, fields: Fields) -> SharedLogger {
        Arc::new(MockLogger::with_fields(self, fields))
    }

    fn with_file(&self, path: &Path) -> SharedLogger {
        Arc::new(MockLogger::with_file(self, path))
    }

    fn with_level(&self, level: &str) -> SharedLogger {
        Arc::new(MockLogger::with_level(self, level))
    }

    fn with_config(&self, config: &Config) -> SharedLogger {
        Arc::new(MockLogger::with_config(self, config))
    }

    fn with_time_format(&self, pattern: &str) -> SharedLogger {
        Arc::new(MockLogger::with_time_format(self, pattern))
    }

    fn set_level(&self, level: &str) -> Result<()> {
        MockLogger::set_level(self, level)
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }

    fn sync(&self) -> Result<()> {
        Ok(())
    }

    fn messages(&self) -> Vec<String> {
        MockLogger::messages(self)
    }
}
