//! Parameter container.
//!
//! Holds the key/value configuration handed to builders, plus a stack of
//! allowed-key sets. The factory pushes an element's declared parameter names
//! before calling its builder and pops them afterwards, so a builder can ask
//! whether a key it reads was actually declared.

use std::collections::{ BTreeMap, BTreeSet };
use std::ops::{ Deref, DerefMut };

/// Key/value parameters with a scoped set of declared keys.
#[derive( Debug, Clone, Default )]
pub struct Params {
	values: BTreeMap<String, String>,
	allowed_keys: Vec<BTreeSet<String>>,
}

impl Params {

	pub fn new() -> Self { Self::default() }

	/// Sets a value, returning the previous one.
	pub fn insert( &mut self, key: impl Into<String>, value: impl Into<String> ) -> Option<String> {
		self.values.insert( key.into(), value.into() )
	}

	/// Builder-style [`insert`]( Self::insert ).
	pub fn with( mut self, key: impl Into<String>, value: impl Into<String> ) -> Self {
		self.insert( key, value );
		self
	}

	pub fn find( &self, key: &str ) -> Option<&str> { self.values.get( key ).map( String::as_str ) }

	/// Parses a value, returning `None` when it is absent or does not parse.
	pub fn find_parsed<T: std::str::FromStr>( &self, key: &str ) -> Option<T> {
		self.find( key ).and_then(| value | value.parse().ok() )
	}

	pub fn contains( &self, key: &str ) -> bool { self.values.contains_key( key ) }

	pub fn len( &self ) -> usize { self.values.len() }

	pub fn is_empty( &self ) -> bool { self.values.is_empty() }

	/// Returns `true` if `key` is declared by the innermost scope.
	///
	/// Outside any scope every key counts as declared.
	pub fn is_declared( &self, key: &str ) -> bool {
		self.allowed_keys.last().is_none_or(| keys | keys.contains( key ))
	}

	/// Pushes a set of declared keys. Must be balanced by [`pop_allowed_keys`]( Self::pop_allowed_keys ).
	pub fn push_allowed_keys( &mut self, keys: BTreeSet<String> ) {
		self.allowed_keys.push( keys );
	}

	/// Pops the innermost set of declared keys.
	pub fn pop_allowed_keys( &mut self ) {
		let popped = self.allowed_keys.pop();
		debug_assert!( popped.is_some(), "unbalanced allowed-key scope" );
	}

	/// Number of scopes currently pushed.
	pub fn scope_depth( &self ) -> usize { self.allowed_keys.len() }

	/// Pushes `keys` and returns a guard that pops them when dropped.
	pub fn scoped( &mut self, keys: BTreeSet<String> ) -> ScopedParams<'_> {
		self.push_allowed_keys( keys );
		ScopedParams { params: self }
	}

}

/// Guard returned by [`Params::scoped`]. Dereferences to the underlying
/// [`Params`] and pops the scope on drop, including during unwinding.
#[derive( Debug )]
pub struct ScopedParams<'a> {
	params: &'a mut Params,
}

impl Deref for ScopedParams<'_> {
	type Target = Params ;
	fn deref( &self ) -> &Params { self.params }
}

impl DerefMut for ScopedParams<'_> {
	fn deref_mut( &mut self ) -> &mut Params { self.params }
}

impl Drop for ScopedParams<'_> {
	fn drop( &mut self ) { self.params.pop_allowed_keys(); }
}
