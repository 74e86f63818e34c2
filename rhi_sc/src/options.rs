//! Backend-neutral compile options
//!
//! `CompileOptions` only records what the caller asked for. Each backend
//! translates the accumulated state into its native form right before a
//! compile, so setter order never matters (macros excepted: they keep
//! insertion order, duplicates included).

use std::fmt;

/// Requested optimization effort
///
/// Ordered: a higher level never asks for less optimization than a lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum OptimizationLevel {
    /// Optimizations disabled
    #[default]
    None,
    /// Level 1
    Level1,
    /// Level 2
    Level2,
    /// Level 3
    Level3,
}

impl OptimizationLevel {
    /// Highest available level
    pub const MAX: OptimizationLevel = OptimizationLevel::Level3;

    /// All levels, lowest first
    pub const ALL: [OptimizationLevel; 4] = [
        OptimizationLevel::None,
        OptimizationLevel::Level1,
        OptimizationLevel::Level2,
        OptimizationLevel::Level3,
    ];
}

/// A preprocessor macro definition (`NAME` or `NAME=VALUE`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroDefinition {
    /// Macro name, passed to the backend unvalidated
    pub name: String,
    /// Optional replacement value
    pub value: Option<String>,
}

impl MacroDefinition {
    /// Create a macro definition
    pub fn new(name: &str, value: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            value: value.map(str::to_string),
        }
    }

    /// Split a command-line style definition at the first `=`
    ///
    /// `"FOO"` has no value, `"BAR=1"` has value `"1"`, `"EMPTY="` has an
    /// empty value and `"A=B=C"` has value `"B=C"`.
    pub fn parse(definition: &str) -> Self {
        match definition.split_once('=') {
            Some((name, value)) => Self::new(name, Some(value)),
            None => Self::new(definition, None),
        }
    }
}

impl fmt::Display for MacroDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

/// Compile settings shared by every backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    macros: Vec<MacroDefinition>,
    optimization_level: OptimizationLevel,
    debugging_symbols: bool,
    entry_point: String,
}

impl CompileOptions {
    /// Entry point used unless `set_entry_point` is called
    pub const DEFAULT_ENTRY_POINT: &'static str = "main";

    /// Create options with no macros, no optimization and no debug info
    pub fn new() -> Self {
        Self {
            macros: Vec::new(),
            optimization_level: OptimizationLevel::None,
            debugging_symbols: false,
            entry_point: Self::DEFAULT_ENTRY_POINT.to_string(),
        }
    }

    /// Append a macro definition
    ///
    /// The name is not validated here; the backend rejects malformed names
    /// at compile time. Redefinitions are appended, never merged.
    pub fn add_macro_definition(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        self.macros.push(MacroDefinition::new(name, value));
        self
    }

    /// Replace the optimization level
    pub fn set_optimization_level(&mut self, level: OptimizationLevel) -> &mut Self {
        self.optimization_level = level;
        self
    }

    /// Request debug symbols; there is no way to turn them off again
    pub fn enable_debugging_symbols(&mut self) -> &mut Self {
        self.debugging_symbols = true;
        self
    }

    /// Replace the entry point function name
    pub fn set_entry_point(&mut self, name: &str) -> &mut Self {
        self.entry_point = name.to_string();
        self
    }

    /// Macro definitions in insertion order
    pub fn macro_definitions(&self) -> &[MacroDefinition] {
        &self.macros
    }

    /// Current optimization level
    pub fn optimization_level(&self) -> OptimizationLevel {
        self.optimization_level
    }

    /// Whether debug symbols were requested
    pub fn debugging_symbols(&self) -> bool {
        self.debugging_symbols
    }

    /// Entry point function name
    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
