use std::collections::HashMap;

/// Supplies values for variables that are not yet bound.
///
/// The evaluator consults a resolver whenever the scanner encounters a
/// variable name with no cached value. `resolve` is called at most once per
/// distinct unbound name per store lifetime; the value it returns is cached
/// and reused for every later reference. The call is synchronous and may
/// block (the command-line shell blocks on standard input).
pub trait Resolver {
    /// Produces a value for the unbound variable `name`.
    fn resolve(&mut self, name: &str) -> f64;
}

/// Any `FnMut(&str) -> f64` closure is a resolver.
///
/// This covers scripted and constant resolution strategies without a
/// dedicated type:
///
/// ```
/// use numera::interpreter::evaluator::Evaluator;
///
/// let mut evaluator = Evaluator::new(|_: &str| 1.0);
///
/// assert_eq!(evaluator.evaluate("unbound + 2").unwrap(), 3.0);
/// ```
impl<F> Resolver for F where F: FnMut(&str) -> f64
{
    fn resolve(&mut self, name: &str) -> f64 {
        self(name)
    }
}

/// Stores the variable bindings owned by an evaluator instance.
///
/// Bindings are created either explicitly through [`VariableStore::set`] or
/// lazily the first time the scanner encounters an unbound name, and they
/// persist for the lifetime of the store, across `evaluate` calls.
#[derive(Debug, Default)]
pub struct VariableStore {
    bindings: HashMap<String, f64>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Returns the cached value for `name`, resolving it first if needed.
    ///
    /// An unbound name is passed to `resolver` exactly once; the value it
    /// produces is cached under the exact, case-sensitive name and returned
    /// for every later reference.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `resolver`: Value source consulted for unbound names.
    ///
    /// # Returns
    /// The bound value.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::variables::VariableStore;
    ///
    /// let mut store = VariableStore::new();
    /// let mut calls = 0;
    /// let mut resolver = |_: &str| {
    ///     calls += 1;
    ///     7.0
    /// };
    ///
    /// assert_eq!(store.get_or_resolve("x", &mut resolver), 7.0);
    /// assert_eq!(store.get_or_resolve("x", &mut resolver), 7.0);
    /// assert_eq!(calls, 1);
    /// ```
    pub fn get_or_resolve<R: Resolver>(&mut self, name: &str, resolver: &mut R) -> f64 {
        if let Some(value) = self.bindings.get(name) {
            return *value;
        }

        let value = resolver.resolve(name);
        self.bindings.insert(name.to_string(), value);
        value
    }

    /// Binds `name` to `value`, overwriting any existing binding.
    ///
    /// No name validation is performed; a name containing non-letters can be
    /// stored but is never produced by the scanner, which only recognizes
    /// runs of ASCII letters.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::variables::VariableStore;
    ///
    /// let mut store = VariableStore::new();
    ///
    /// store.set("x", 10.0);
    /// assert_eq!(store.get("x"), Some(10.0));
    ///
    /// store.set("x", 20.0);
    /// assert_eq!(store.get("x"), Some(20.0));
    /// ```
    pub fn set(&mut self, name: &str, value: f64) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }
}
