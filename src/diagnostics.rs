//! Fatal diagnostics.
//!
//! A plugin reference that cannot be resolved is a defect in the simulation's
//! configuration, not a transient fault, so the factory does not try to recover
//! from one. Every resolution failure becomes a [`FactoryError`] that is handed
//! to a [`DiagnosticSink`], which reports it and never returns.

use itertools::Itertools ;
use pipe_trait::Pipe ;
use thiserror::Error ;

use crate::QualifiedName ;
use crate::capability::Capability ;
use crate::loader::SearchPaths ;

/// Everything that can go wrong while resolving or constructing an element.
#[derive( Debug, Error, Clone, PartialEq, Eq )]
pub enum FactoryError {

	/// The loader could not provide the library, or it never registered.
	#[error( "can't find requested element library '{library}' (search paths: '{search_paths}')" )]
	LibraryNotFound { library: String, search_paths: SearchPaths },

	/// The library is loaded but does not describe the requested element.
	#[error( "can't find requested {capability} '{name}'{}", listing( .capability, .alternatives, .sibling ))]
	ElementNotFound {
		capability: Capability,
		name: QualifiedName,
		/// Elements the library does register for `capability`
		alternatives: Vec<String>,
		/// Elements the library registers for the sibling capability
		sibling: Option<( Capability, Vec<String> )>,
	},

	/// The element is described but has no builder for this capability.
	#[error( "can't find a {capability} builder for '{name}'" )]
	BuilderNotFound { capability: Capability, name: QualifiedName },

	#[error( "core attempted to load an empty module name, did you miss a module string in your input deck?" )]
	EmptyModuleName,

	/// An introspection query used the empty type name outside of component construction.
	#[error( "no component is under construction to resolve the empty type name against (statistic or slot '{query}')" )]
	NoTypeUnderConstruction { query: String },

}

fn listing( capability: &Capability, alternatives: &[String], sibling: &Option<( Capability, Vec<String> )>) -> String {
	let mut out = String::new();
	if let Some( hint ) = capability.hint() {
		out.push_str( "; " );
		out.push_str( hint );
	}
	out.push_str( &section( *capability, alternatives ));
	if let Some(( sibling, elements )) = sibling {
		out.push_str( &section( *sibling, elements ));
	}
	out
}

fn section( capability: Capability, elements: &[String] ) -> String {
	match elements.is_empty() {
		true => format!( "\n  no {}s registered by this library", capability ),
		false => elements.iter()
			.map(| element | format!( "    {}", element ))
			.join( "\n" )
			.pipe(| list | format!( "\n  valid {}s:\n{}", capability, list )),
	}
}

/// Reports fatal diagnostics.
///
/// Implementations must not return: the factory relies on `fatal` diverging so
/// that no partially resolved element is ever handed back to a caller.
pub trait DiagnosticSink: Send + Sync {
	fn fatal( &self, error: &FactoryError ) -> ! ;
}

/// Reports the diagnostic and terminates the process.
///
/// The diagnostic goes to the active `tracing` subscriber when one accepts
/// errors, and straight to stderr otherwise.
#[derive( Debug, Clone, Copy )]
pub struct ExitOnFatal {
	/// Exit status used when terminating
	pub status: i32,
}

impl Default for ExitOnFatal {
	fn default() -> Self { Self { status: 1 }}
}

impl DiagnosticSink for ExitOnFatal {
	fn fatal( &self, error: &FactoryError ) -> ! {
		match tracing::enabled!( tracing::Level::ERROR ) {
			true => tracing::error!( "{}", error ),
			false => eprintln!( "FATAL: {}", error ),
		}
		std::process::exit( self.status )
	}
}

/// Panics with the rendered diagnostic.
///
/// Useful when the factory is embedded in a host that isolates failures by
/// catching unwinds, and in tests.
#[derive( Debug, Clone, Copy, Default )]
pub struct PanicOnFatal ;

impl DiagnosticSink for PanicOnFatal {
	fn fatal( &self, error: &FactoryError ) -> ! {
		panic!( "{}", error )
	}
}
