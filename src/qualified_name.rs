//! Qualified element names.
//!
//! Every pluggable type is addressed as `"<library>.<element>"`. A name without
//! a separator refers to an element named after its own library, which is how
//! self-describing built-ins and per-library singletons (scripting bridges) are
//! addressed.

/// Separator between the library part and the element part of a name.
pub const SEPARATOR: char = '.' ;

/// A `"<library>.<element>"` pair identifying a pluggable type.
#[derive( Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default )]
pub struct QualifiedName {
	library: String,
	element: String,
}

impl QualifiedName {

	/// Creates a qualified name from its two parts.
	pub fn new( library: impl Into<String>, element: impl Into<String> ) -> Self {
		Self { library: library.into(), element: element.into() }
	}

	/// Splits `name` at the first [`SEPARATOR`].
	///
	/// Everything before the separator is the library and everything after it
	/// is the element, so `"a.b.c"` parses as `( "a", "b.c" )`. A name without a
	/// separator yields the same string for both parts.
	///
	/// An empty name is not an error: it logs a warning, since it usually means
	/// a configuration value defaulted to an empty string, and returns
	/// `( "", "" )`.
	///
	/// ```
	/// use element_factory::QualifiedName ;
	///
	/// let name = QualifiedName::parse( "memory.cache" );
	/// assert_eq!(( name.library(), name.element() ), ( "memory", "cache" ));
	///
	/// let name = QualifiedName::parse( "memory" );
	/// assert_eq!(( name.library(), name.element() ), ( "memory", "memory" ));
	/// ```
	pub fn parse( name: &str ) -> Self {
		match name.split_once( SEPARATOR ) {
			Some(( library, element )) => Self::new( library, element ),
			None => {
				if name.is_empty() {
					tracing::warn!(
						"got empty element library name; a missing parameter may have defaulted to an empty string"
					);
				}
				Self::new( name, name )
			}
		}
	}

	/// The library part.
	#[inline] pub fn library( &self ) -> &str { &self.library }

	/// The element part.
	#[inline] pub fn element( &self ) -> &str { &self.element }

	/// Consumes the name, returning `( library, element )`.
	#[inline] pub fn into_parts( self ) -> ( String, String ) {( self.library, self.element )}

}

/// Renders `library.element`, or just the library when the element is named
/// after it, so a bare name prints the way it was written.
impl std::fmt::Display for QualifiedName {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
		match self.library == self.element {
			true => f.write_str( &self.library ),
			false => write!( f, "{}{}{}", self.library, SEPARATOR, self.element ),
		}
	}
}

impl From<&str> for QualifiedName {
	fn from( name: &str ) -> Self { Self::parse( name ) }
}
