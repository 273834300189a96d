//! The factory: the single authority that loads element libraries and
//! constructs elements from them.
//!
//! All entry points share one reentrant lock. Loading, resolving and building
//! happen while it is held, so no caller ever sees a library that is halfway
//! through registering. Builders receive the factory and commonly call back into
//! it on the same thread to build their own sub-components; the lock admits
//! that.

use std::cell::RefCell ;
use std::sync::Arc ;
use nonempty_collections::NESet ;
use parking_lot::{ ReentrantMutex, ReentrantMutexGuard };

use crate::QualifiedName ;
use crate::diagnostics::{ DiagnosticSink, ExitOnFatal, FactoryError };
use crate::loader::{ LibraryLoader, SearchPaths };
use crate::registry::{ TypeRegistry, BUILTIN_LIBRARY };

mod libraries ;
mod construction ;
mod introspection ;

/// Registry and construction authority for element libraries.
///
/// A `Factory` is an ordinary owned value. Share it by reference (or `Arc`)
/// with everything that needs to construct elements; builders are handed a
/// `&Factory` for nested construction.
///
/// Every `create_*` method has a `try_create_*` twin that returns the
/// [`FactoryError`] instead of passing it to the [`DiagnosticSink`].
pub struct Factory {
	search_paths: SearchPaths,
	loader: Box<dyn LibraryLoader>,
	registry: Arc<TypeRegistry>,
	diagnostics: Box<dyn DiagnosticSink>,
	state: ReentrantMutex<RefCell<FactoryState>>,
}

/// Mutable state guarded by the factory lock.
///
/// Borrows of the `RefCell` must never span a call into a loader or builder,
/// since those re-enter the factory.
struct FactoryState {
	/// Libraries loaded so far; never shrinks
	loaded: NESet<String>,
	/// Components currently being built, innermost last
	constructing: Vec<QualifiedName>,
}

impl Factory {

	/// Creates a factory that loads libraries through `loader`.
	///
	/// `search_paths` is handed to the loader on every load; a `&str` is parsed
	/// as a `:`-separated list. The factory starts with its own empty
	/// [`TypeRegistry`] and terminates the process on fatal diagnostics; use
	/// [`with_registry`]( Self::with_registry ) and
	/// [`with_diagnostics`]( Self::with_diagnostics ) to change either.
	pub fn new( search_paths: impl Into<SearchPaths>, loader: impl LibraryLoader + 'static ) -> Self {
		Self {
			search_paths: search_paths.into(),
			loader: Box::new( loader ),
			registry: Arc::new( TypeRegistry::new() ),
			diagnostics: Box::new( ExitOnFatal::default() ),
			state: ReentrantMutex::new( RefCell::new( FactoryState {
				loaded: NESet::new( BUILTIN_LIBRARY.to_string() ),
				constructing: Vec::new(),
			})),
		}
	}

	/// Uses `registry` instead of a private one. Call before anything is loaded.
	pub fn with_registry( mut self, registry: Arc<TypeRegistry> ) -> Self {
		self.registry = registry ;
		self
	}

	/// Sets where fatal diagnostics go.
	pub fn with_diagnostics( mut self, diagnostics: impl DiagnosticSink + 'static ) -> Self {
		self.diagnostics = Box::new( diagnostics );
		self
	}

	#[inline] pub fn search_paths( &self ) -> &SearchPaths { &self.search_paths }

	#[inline] pub fn registry( &self ) -> &Arc<TypeRegistry> { &self.registry }

	/// Hands `error` to the diagnostic sink.
	pub fn fatal( &self, error: &FactoryError ) -> ! {
		self.diagnostics.fatal( error )
	}

	fn lock( &self ) -> ReentrantMutexGuard<'_, RefCell<FactoryState>> {
		self.state.lock()
	}

}

impl std::fmt::Debug for Factory {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "Factory" )
			.field( "search_paths", &self.search_paths )
			.field( "loaded", &self.loaded_library_names() )
			.finish_non_exhaustive()
	}
}

/// Marks a component type as under construction for as long as it lives.
struct Constructing<'a> {
	state: &'a RefCell<FactoryState>,
}

impl<'a> Constructing<'a> {
	fn enter( state: &'a RefCell<FactoryState>, name: QualifiedName ) -> Self {
		state.borrow_mut().constructing.push( name );
		Self { state }
	}
}

impl Drop for Constructing<'_> {
	fn drop( &mut self ) {
		self.state.borrow_mut().constructing.pop();
	}
}
