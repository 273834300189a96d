//! Library loading.
//!
//! The factory does not know how element libraries reach the process; it asks a
//! [`LibraryLoader`] to make a library register itself and then checks the
//! [`TypeRegistry`] to see whether it did. [`StaticLoader`] is the loader for
//! libraries linked into the executable.

use std::collections::HashMap ;
use std::path::{ Path, PathBuf };
use std::sync::Arc ;
use itertools::Itertools ;

use crate::registry::{ LibraryBuilder, TypeRegistry };

/// Separator between entries of a search-path string.
pub const SEARCH_PATH_SEPARATOR: char = ':' ;

/// Ordered list of directories searched for element libraries.
///
/// Parsed from a `:`-separated string. Empty segments are dropped.
///
/// ```
/// use element_factory::SearchPaths ;
///
/// let paths: SearchPaths = "/opt/elements::/usr/lib/elements".parse().unwrap();
/// assert_eq!( paths.len(), 2 );
/// assert_eq!( paths.to_string(), "/opt/elements:/usr/lib/elements" );
/// ```
#[derive( Debug, Clone, Default, PartialEq, Eq )]
pub struct SearchPaths( Vec<PathBuf> );

impl SearchPaths {

	pub fn new( paths: impl IntoIterator<Item = impl Into<PathBuf>> ) -> Self {
		Self( paths.into_iter().map( Into::into ).collect() )
	}

	pub fn iter( &self ) -> impl Iterator<Item = &Path> { self.0.iter().map( PathBuf::as_path ) }

	pub fn len( &self ) -> usize { self.0.len() }

	pub fn is_empty( &self ) -> bool { self.0.is_empty() }

}

impl From<&str> for SearchPaths {
	fn from( paths: &str ) -> Self {
		Self::new( paths.split( SEARCH_PATH_SEPARATOR ).filter(| path | !path.is_empty() ))
	}
}

impl std::str::FromStr for SearchPaths {
	type Err = std::convert::Infallible ;
	fn from_str( paths: &str ) -> Result<Self, Self::Err> { Ok( Self::from( paths )) }
}

impl std::fmt::Display for SearchPaths {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
		write!( f, "{}", self.0.iter().map(| path | path.display() ).join( &SEARCH_PATH_SEPARATOR.to_string() ))
	}
}

/// Makes element libraries register themselves.
///
/// Called by the factory, under its lock, at most once per successfully loaded
/// library. The return value is advisory: the factory only treats a library as
/// loaded once [`TypeRegistry::is_registered`] reports it, since a library may
/// register through a different path than the call that loaded it.
pub trait LibraryLoader: Send + Sync {

	/// Attempts to load library `name`.
	///
	/// When `report_errors` is `false` the caller is only probing for the
	/// library, and a missing library should not be reported.
	fn load_library(
		&self,
		name: &str,
		search_paths: &SearchPaths,
		registry: &TypeRegistry,
		report_errors: bool,
	) -> bool ;

}

type Registration = Arc<dyn Fn( &mut LibraryBuilder ) + Send + Sync>;

/// Loader for libraries compiled into the executable.
///
/// Each library is a registration callback stored under the library's name.
/// Search paths are not consulted.
#[derive( Default, Clone )]
pub struct StaticLoader {
	libraries: HashMap<String, Registration>,
}

impl StaticLoader {

	pub fn new() -> Self { Self::default() }

	/// Adds a library. A later library with the same name replaces the earlier one.
	pub fn with_library<F>( mut self, name: impl Into<String>, register: F ) -> Self
	where
		F: Fn( &mut LibraryBuilder ) + Send + Sync + 'static,
	{
		self.libraries.insert( name.into(), Arc::new( register ));
		self
	}

	/// Names of every library this loader can provide, sorted.
	pub fn available( &self ) -> Vec<&str> {
		self.libraries.keys().map( String::as_str ).sorted().collect()
	}

}

impl LibraryLoader for StaticLoader {

	fn load_library(
		&self,
		name: &str,
		search_paths: &SearchPaths,
		registry: &TypeRegistry,
		report_errors: bool,
	) -> bool {

		let Some( register ) = self.libraries.get( name ) else {
			if report_errors {
				tracing::error!(
					library = name,
					search_paths = %search_paths,
					available = %self.available().join( ", " ),
					"element library not found"
				);
			}
			return false
		};

		registry.register_library( name, | library | register( library ))
			.into_iter()
			.for_each(| error | tracing::warn!( library = name, "{}", error ));
		true

	}

}

impl std::fmt::Debug for StaticLoader {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "StaticLoader" )
			.field( "libraries", &self.available() )
			.finish()
	}
}
