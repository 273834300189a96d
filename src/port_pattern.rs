//! Port-name patterns.
//!
//! Components declare the ports they accept as patterns rather than a fixed list,
//! since many of them expose numbered port banks. The grammar is small:
//!
//! - `*` on its own matches every name, including the empty one.
//! - Any other pattern is literal text that may contain digit placeholders,
//! 	written `%d` or `%(name)d`. The name inside the parentheses is documentation
//! 	only. A placeholder consumes a run of ASCII digits in the candidate.
//!
//! A placeholder accepts an empty digit run, so `port%d` matches `port`.
//! A `%` that is not followed by `d` or `(` is an ordinary character.

const WILDCARD: &str = "*" ;
const MARKER: u8 = b'%' ;
const DIGITS: u8 = b'd' ;
const OPEN: u8 = b'(' ;
const CLOSE: u8 = b')' ;

/// A declared port-name pattern.
#[derive( Debug, Clone, PartialEq, Eq, Hash )]
pub struct PortPattern( String );

impl PortPattern {

	/// Wraps a pattern string. Patterns are not validated up front; a malformed
	/// placeholder simply never matches.
	pub fn new( pattern: impl Into<String> ) -> Self { Self( pattern.into() ) }

	/// The raw pattern text.
	#[inline] pub fn as_str( &self ) -> &str { &self.0 }

	/// Returns `true` if `candidate` satisfies this pattern.
	pub fn matches( &self, candidate: &str ) -> bool { matches( &self.0, candidate ) }

}

impl std::fmt::Display for PortPattern {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result { f.write_str( &self.0 ) }
}

impl From<&str> for PortPattern {
	fn from( pattern: &str ) -> Self { Self::new( pattern ) }
}

impl From<String> for PortPattern {
	fn from( pattern: String ) -> Self { Self( pattern ) }
}

/// Returns `true` if `candidate` satisfies `pattern`.
///
/// ```
/// use element_factory::port_pattern::matches ;
///
/// assert!( matches( "*", "" ));
/// assert!( matches( "port%d", "port12" ));
/// assert!( matches( "bank%(bank)d_port%d", "bank3_port0" ));
/// assert!( !matches( "port%d", "portX" ));
/// ```
pub fn matches( pattern: &str, candidate: &str ) -> bool {

	if pattern == WILDCARD { return true }

	let pattern = pattern.as_bytes();
	let candidate = candidate.as_bytes();
	let mut p = 0 ;
	let mut c = 0 ;

	while p < pattern.len() {
		match placeholder_len( &pattern[p..] ) {
			Placeholder::Complete( len ) => {
				p += len ;
				while c < candidate.len() && candidate[c].is_ascii_digit() { c += 1 }
			}
			Placeholder::Malformed => return false,
			Placeholder::None => {
				if c >= candidate.len() || pattern[p] != candidate[c] { return false }
				p += 1 ;
				c += 1 ;
			}
		}
	}

	c == candidate.len()

}

/// Returns `true` if `candidate` satisfies at least one of `patterns`.
pub fn matches_any<'a>( patterns: impl IntoIterator<Item = &'a PortPattern>, candidate: &str ) -> bool {
	patterns.into_iter().any(| pattern | pattern.matches( candidate ))
}

enum Placeholder {
	None,
	Complete( usize ),
	Malformed,
}

/// Classifies the start of `rest`.
fn placeholder_len( rest: &[u8] ) -> Placeholder {
	match rest {
		[ MARKER, DIGITS, .. ] => Placeholder::Complete( 2 ),
		[ MARKER, OPEN, tail @ .. ] => match tail.iter().position(| &byte | byte == CLOSE ) {
			Some( close ) if tail.get( close + 1 ) == Some( &DIGITS ) => Placeholder::Complete( close + 4 ),
			_ => Placeholder::Malformed,
		},
		_ => Placeholder::None,
	}
}
