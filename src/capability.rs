//! Capability kinds, instance traits and builder signatures.
//!
//! A capability is a category of constructible thing. Each one has its own
//! builder signature, but all of them are stored in the same registry and
//! resolved through the same code path, keyed by [`Capability`].

use std::any::Any ;
use std::sync::Arc ;

use crate::Factory ;
use crate::params::Params ;

/// The kind of element being registered or constructed.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord )]
pub enum Capability {
	Component,
	SubComponent,
	/// A module built from parameters alone.
	Module,
	/// A module bound to an owning component. Shares descriptors with [`Module`]( Self::Module ).
	ModuleWithComponent,
	Partitioner,
	ScriptingBridge,
}

impl Capability {

	/// The capability whose table holds this capability's descriptors.
	pub const fn descriptor_table( self ) -> Self {
		match self {
			Self::ModuleWithComponent => Self::Module,
			other => other,
		}
	}

	/// The capability users most often confuse with this one, if any.
	///
	/// Not-found diagnostics list the sibling's elements too, which catches a
	/// sub-component being requested as a component and vice versa.
	pub const fn sibling( self ) -> Option<Self> {
		match self {
			Self::Component => Some( Self::SubComponent ),
			Self::SubComponent => Some( Self::Component ),
			_ => None,
		}
	}

	/// Extra advice appended to not-found diagnostics.
	pub const fn hint( self ) -> Option<&'static str> {
		match self {
			Self::Partitioner => Some( "check --help for information on partitioners" ),
			_ => None,
		}
	}

}

impl std::fmt::Display for Capability {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
		f.write_str( match self {
			Self::Component => "component",
			Self::SubComponent => "subcomponent",
			Self::Module | Self::ModuleWithComponent => "module",
			Self::Partitioner => "partitioner",
			Self::ScriptingBridge => "scripting bridge",
		})
	}
}

/// Identifier of a component instance within a simulation.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord )]
pub struct ComponentId( u64 );

impl ComponentId {
	pub const fn new( id: u64 ) -> Self { Self( id )}
}

impl std::fmt::Display for ComponentId {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
		std::fmt::Display::fmt( &self.0, f )
	}
}

impl From<ComponentId> for u64 {
	fn from( id: ComponentId ) -> Self { id.0 }
}

/// A position in the rank/thread grid of a parallel simulation.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash, Default )]
pub struct RankInfo {
	pub rank: u32,
	pub thread: u32,
}

impl RankInfo {
	pub const fn new( rank: u32, thread: u32 ) -> Self { Self { rank, thread }}
}

/// A simulation component.
pub trait Component: Any + Send {}

/// An element that fills a slot in an owning component.
pub trait SubComponent: Any + Send {}

/// A helper object that is not part of the simulated topology.
pub trait Module: Any + Send {}

/// Splits a simulation graph across ranks.
pub trait Partitioner: Any + Send {}

/// Exposes a library's elements to the configuration scripting layer.
pub trait ScriptingBridge: Any + Send {
	/// Library this bridge was created for.
	fn library( &self ) -> &str ;
}

/// Builds a component from its id and parameters.
pub type ComponentBuilder = Arc<dyn Fn( &Factory, ComponentId, &mut Params ) -> Box<dyn Component> + Send + Sync>;
/// Builds a sub-component for the owning component.
pub type SubComponentBuilder = Arc<dyn Fn( &Factory, ComponentId, &mut Params ) -> Box<dyn SubComponent> + Send + Sync>;
/// Builds a module from parameters alone.
pub type ModuleBuilder = Arc<dyn Fn( &Factory, &mut Params ) -> Box<dyn Module> + Send + Sync>;
/// Builds a module bound to the owning component.
pub type ModuleWithComponentBuilder = Arc<dyn Fn( &Factory, ComponentId, &mut Params ) -> Box<dyn Module> + Send + Sync>;
/// Builds a partitioner from the total rank count, the local rank and a verbosity.
pub type PartitionerBuilder = Arc<dyn Fn( &Factory, RankInfo, RankInfo, u32 ) -> Box<dyn Partitioner> + Send + Sync>;
/// Builds the scripting bridge for a library, given the library name.
pub type ScriptingBridgeBuilder = Arc<dyn Fn( &str ) -> Box<dyn ScriptingBridge> + Send + Sync>;

/// A registered constructor, tagged with its capability.
#[derive( Clone )]
pub enum BuilderEntry {
	Component( ComponentBuilder ),
	SubComponent( SubComponentBuilder ),
	Module( ModuleBuilder ),
	ModuleWithComponent( ModuleWithComponentBuilder ),
	Partitioner( PartitionerBuilder ),
	ScriptingBridge( ScriptingBridgeBuilder ),
}

impl BuilderEntry {
	pub fn capability( &self ) -> Capability {
		match self {
			Self::Component( _ ) => Capability::Component,
			Self::SubComponent( _ ) => Capability::SubComponent,
			Self::Module( _ ) => Capability::Module,
			Self::ModuleWithComponent( _ ) => Capability::ModuleWithComponent,
			Self::Partitioner( _ ) => Capability::Partitioner,
			Self::ScriptingBridge( _ ) => Capability::ScriptingBridge,
		}
	}
}

impl std::fmt::Debug for BuilderEntry {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_tuple( "BuilderEntry" ).field( &self.capability() ).field( &"<builder>" ).finish()
	}
}

/// Extracts a typed builder from a [`BuilderEntry`].
///
/// Lets the factory resolve any capability through one generic path and get the
/// concrete closure type back.
pub(crate) trait BuilderKind: Sized {
	const CAPABILITY: Capability ;
	fn from_entry( entry: BuilderEntry ) -> Option<Self> ;
}

macro_rules! builder_kind {
	( $( $variant:ident => $builder:ty ),* $(,)? ) => { $(
		impl BuilderKind for $builder {
			const CAPABILITY: Capability = Capability::$variant ;
			fn from_entry( entry: BuilderEntry ) -> Option<Self> {
				match entry {
					BuilderEntry::$variant( builder ) => Some( builder ),
					_ => None,
				}
			}
		}
	)* };
}

builder_kind! {
	Component => ComponentBuilder,
	SubComponent => SubComponentBuilder,
	Module => ModuleBuilder,
	ModuleWithComponent => ModuleWithComponentBuilder,
	Partitioner => PartitionerBuilder,
	ScriptingBridge => ScriptingBridgeBuilder,
}
