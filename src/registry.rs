//! The type registry.
//!
//! Libraries describe their elements to the registry when they are loaded. The
//! registry keeps one table per capability, each keyed by library and element
//! name, holding the element's [`TypeDescriptor`] and its [`BuilderEntry`].
//! Descriptors live in a per-capability table of their own so that capabilities
//! sharing metadata (modules, with or without an owning component) resolve
//! against the same descriptor.

use std::collections::{ BTreeMap, BTreeSet, HashMap };
use std::sync::Arc ;
use parking_lot::RwLock ;
use thiserror::Error ;

use crate::{ Factory, QualifiedName };
use crate::capability::*;
use crate::descriptor::TypeDescriptor ;
use crate::params::Params ;

/// Name of the library that is part of the core and is always loaded.
pub const BUILTIN_LIBRARY: &str = "sst" ;

/// Problems found while a library registers its elements.
///
/// These never abort a registration: the offending entry is skipped and the rest
/// of the library is registered.
#[derive( Debug, Error, Clone, PartialEq, Eq )]
pub enum RegistrationError {
	/// An element with this name is already registered for the capability.
	/// The first registration is kept.
	#[error( "Duplicate {capability} '{name}' ignored" )]
	DuplicateElement { capability: Capability, name: QualifiedName },
}

type Table<T> = HashMap<Capability, HashMap<String, BTreeMap<String, T>>>;

#[derive( Default )]
struct Tables {
	libraries: BTreeSet<String>,
	descriptors: Table<Arc<TypeDescriptor>>,
	builders: Table<BuilderEntry>,
}

/// Registry of every element type known to the process.
///
/// Shared between the [`Factory`] and the [`LibraryLoader`]( crate::LibraryLoader )
/// that populates it. Lookups return shared handles, so no lock is held while
/// the caller uses them.
pub struct TypeRegistry {
	tables: RwLock<Tables>,
}

impl TypeRegistry {

	/// Creates a registry in which only the built-in library is registered.
	pub fn new() -> Self {
		let mut tables = Tables::default();
		tables.libraries.insert( BUILTIN_LIBRARY.to_string() );
		Self { tables: RwLock::new( tables ) }
	}

	/// Registers the elements of library `name`.
	///
	/// `register` receives a [`LibraryBuilder`] to declare elements on. The
	/// library is marked as registered once the callback returns, even if it
	/// declared nothing.
	///
	/// Returns the entries that were rejected.
	pub fn register_library(
		&self,
		name: &str,
		register: impl FnOnce( &mut LibraryBuilder ),
	) -> Vec<RegistrationError> {

		let mut library = LibraryBuilder { library: name.to_string(), entries: Vec::new() };
		register( &mut library );

		let mut tables = self.tables.write();
		let errors = library.entries.into_iter()
			.filter_map(| entry | tables.insert( name, entry ).err() )
			.collect::<Vec<_>>();
		tables.libraries.insert( name.to_string() );

		tracing::debug!( library = name, rejected = errors.len(), "registered element library" );
		errors

	}

	/// Returns `true` once library `name` has finished registering.
	pub fn is_registered( &self, name: &str ) -> bool {
		self.tables.read().libraries.contains( name )
	}

	/// Names of every registered library, sorted.
	pub fn libraries( &self ) -> Vec<String> {
		self.tables.read().libraries.iter().cloned().collect()
	}

	/// Looks up the descriptor for an element.
	///
	/// `capability` is mapped to the table that stores its descriptors, so
	/// [`Capability::ModuleWithComponent`] finds module descriptors.
	pub fn descriptor( &self, capability: Capability, library: &str, element: &str ) -> Option<Arc<TypeDescriptor>> {
		self.tables.read().descriptors
			.get( &capability.descriptor_table() )
			.and_then(| libraries | libraries.get( library ))
			.and_then(| elements | elements.get( element ))
			.cloned()
	}

	/// Looks up the builder for an element.
	pub fn builder( &self, capability: Capability, library: &str, element: &str ) -> Option<BuilderEntry> {
		self.tables.read().builders
			.get( &capability )
			.and_then(| libraries | libraries.get( library ))
			.and_then(| elements | elements.get( element ))
			.cloned()
	}

	/// Sorted names of every element `library` registered for `capability`.
	pub fn elements( &self, capability: Capability, library: &str ) -> Vec<String> {
		self.tables.read().descriptors
			.get( &capability.descriptor_table() )
			.and_then(| libraries | libraries.get( library ))
			.map(| elements | elements.keys().cloned().collect() )
			.unwrap_or_default()
	}

}

impl Default for TypeRegistry {
	fn default() -> Self { Self::new() }
}

impl std::fmt::Debug for TypeRegistry {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "TypeRegistry" )
			.field( "libraries", &self.tables.read().libraries )
			.finish_non_exhaustive()
	}
}

impl Tables {

	fn insert( &mut self, library: &str, entry: Entry ) -> Result<(), RegistrationError> {

		let capability = entry.builder.capability();
		let builders = self.builders
			.entry( capability ).or_default()
			.entry( library.to_string() ).or_default();

		if builders.contains_key( &entry.element ) {
			return Err( RegistrationError::DuplicateElement {
				capability,
				name: QualifiedName::new( library, entry.element ),
			})
		}

		builders.insert( entry.element.clone(), entry.builder );
		self.descriptors
			.entry( capability.descriptor_table() ).or_default()
			.entry( library.to_string() ).or_default()
			.entry( entry.element )
			.or_insert( entry.descriptor );
		Ok(())

	}

}

struct Entry {
	element: String,
	descriptor: Arc<TypeDescriptor>,
	builder: BuilderEntry,
}

/// Collects the element declarations of one library.
///
/// Handed to the callback passed to [`TypeRegistry::register_library`].
/// Declarations are applied together when the callback returns.
pub struct LibraryBuilder {
	library: String,
	entries: Vec<Entry>,
}

impl LibraryBuilder {

	/// Name of the library being registered.
	pub fn library( &self ) -> &str { &self.library }

	/// Declares a component.
	pub fn component<F>( &mut self, element: &str, descriptor: TypeDescriptor, builder: F ) -> &mut Self
	where
		F: Fn( &Factory, ComponentId, &mut Params ) -> Box<dyn Component> + Send + Sync + 'static,
	{
		self.entry( element, descriptor, BuilderEntry::Component( Arc::new( builder )))
	}

	/// Declares a sub-component.
	pub fn sub_component<F>( &mut self, element: &str, descriptor: TypeDescriptor, builder: F ) -> &mut Self
	where
		F: Fn( &Factory, ComponentId, &mut Params ) -> Box<dyn SubComponent> + Send + Sync + 'static,
	{
		self.entry( element, descriptor, BuilderEntry::SubComponent( Arc::new( builder )))
	}

	/// Declares a module built from parameters alone.
	pub fn module<F>( &mut self, element: &str, descriptor: TypeDescriptor, builder: F ) -> &mut Self
	where
		F: Fn( &Factory, &mut Params ) -> Box<dyn Module> + Send + Sync + 'static,
	{
		self.entry( element, descriptor, BuilderEntry::Module( Arc::new( builder )))
	}

	/// Declares a module bound to an owning component.
	///
	/// If the same element is also declared with [`module`]( Self::module ),
	/// whichever declaration came first provides the shared descriptor.
	pub fn module_with_component<F>( &mut self, element: &str, descriptor: TypeDescriptor, builder: F ) -> &mut Self
	where
		F: Fn( &Factory, ComponentId, &mut Params ) -> Box<dyn Module> + Send + Sync + 'static,
	{
		self.entry( element, descriptor, BuilderEntry::ModuleWithComponent( Arc::new( builder )))
	}

	/// Declares a partitioner.
	pub fn partitioner<F>( &mut self, element: &str, descriptor: TypeDescriptor, builder: F ) -> &mut Self
	where
		F: Fn( &Factory, RankInfo, RankInfo, u32 ) -> Box<dyn Partitioner> + Send + Sync + 'static,
	{
		self.entry( element, descriptor, BuilderEntry::Partitioner( Arc::new( builder )))
	}

	/// Declares the library's scripting bridge. A library has at most one, and it
	/// is addressed by the library name alone.
	pub fn scripting_bridge<F>( &mut self, descriptor: TypeDescriptor, builder: F ) -> &mut Self
	where
		F: Fn( &str ) -> Box<dyn ScriptingBridge> + Send + Sync + 'static,
	{
		let element = self.library.clone();
		self.entry( &element, descriptor, BuilderEntry::ScriptingBridge( Arc::new( builder )))
	}

	fn entry( &mut self, element: &str, descriptor: TypeDescriptor, builder: BuilderEntry ) -> &mut Self {
		self.entries.push( Entry { element: element.to_string(), descriptor: Arc::new( descriptor ), builder });
		self
	}

}

impl std::fmt::Debug for LibraryBuilder {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "LibraryBuilder" )
			.field( "library", &self.library )
			.field( "entries", &self.entries.len() )
			.finish()
	}
}
