use std::cell::RefCell ;
use itertools::Itertools ;

use crate::{ Factory, QualifiedName };
use crate::diagnostics::FactoryError ;
use crate::registry::BUILTIN_LIBRARY ;
use super::FactoryState ;

impl Factory {

	/// Makes sure library `name` is loaded, loading it if needed.
	///
	/// The built-in library is always loaded and never checked. A library that
	/// cannot be loaded is fatal.
	pub fn require_library( &self, name: &str ) {
		if let Err( error ) = self.try_require_library( name ) { self.fatal( &error ) }
	}

	/// [`require_library`]( Self::require_library ) returning the error instead.
	///
	/// # Errors
	/// [`FactoryError::LibraryNotFound`] if the library does not load.
	pub fn try_require_library( &self, name: &str ) -> Result<(), FactoryError> {
		if name == BUILTIN_LIBRARY { return Ok(()) }
		match self.find_library( name, true ) {
			true => Ok(()),
			false => Err( FactoryError::LibraryNotFound {
				library: name.to_string(),
				search_paths: self.search_paths.clone(),
			}),
		}
	}

	/// Returns `true` if library `name` is loaded or can be loaded.
	///
	/// Probes quietly: a library that does not exist is not reported.
	pub fn has_library( &self, name: &str ) -> bool {
		self.find_library( name, false )
	}

	/// Returns `true` if library `name` is loaded, attempting to load it first
	/// if it is not. `report_errors` is passed on to the loader.
	pub fn find_library( &self, name: &str, report_errors: bool ) -> bool {
		let state = self.lock();
		if state.borrow().loaded.contains( name ) { return true }
		self.load_library( &state, name, report_errors )
	}

	/// Requires the library of every event type named. Events have no
	/// descriptors; only their library needs to be present.
	pub fn require_event( &self, event: &str ) {
		self.require_library( QualifiedName::parse( event ).library() );
	}

	/// Sorted names of every loaded library, including the built-in one.
	pub fn loaded_library_names( &self ) -> Vec<String> {
		let state = self.lock();
		let names = state.borrow().loaded.iter().into_iter().cloned().sorted().collect();
		names
	}

	/// Loads each named library that is not loaded yet, reporting failures.
	///
	/// Used to bring a process up to the library set another process reported.
	/// Libraries that fail to load are skipped.
	pub fn load_unloaded_libraries<'a>( &self, names: impl IntoIterator<Item = &'a str> ) {
		names.into_iter().for_each(| name | { self.find_library( name, true ); });
	}

	/// Loads `name` through the loader and records it once the registry confirms it.
	///
	/// Must be called with the factory lock held and no borrow of `state` active.
	fn load_library( &self, state: &RefCell<FactoryState>, name: &str, report_errors: bool ) -> bool {

		let reported = self.loader.load_library( name, &self.search_paths, &self.registry, report_errors );

		if !self.registry.is_registered( name ) {
			tracing::debug!( library = name, loader_reported = reported, "element library did not register" );
			return false
		}

		state.borrow_mut().loaded.insert( name.to_string() );
		tracing::debug!( library = name, "loaded element library" );
		true

	}

}
