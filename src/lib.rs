//! Registry and construction authority for the pluggable elements of a modular
//! simulation framework.
//!
//! Element libraries provide components, sub-components, modules, partitioners
//! and scripting bridges. The [`Factory`] loads those libraries on demand,
//! resolves element types by qualified name and builds instances of them,
//! checking each construction against the type's declared metadata.
//!
//! # Core Concepts
//!
//! - [`QualifiedName`]: `"<library>.<element>"`. A name without a `.` refers to
//! 	an element named after its own library.
//!
//! - [`LibraryLoader`]: brings a library into the process and makes it register
//! 	its elements. [`StaticLoader`] serves libraries compiled into the executable.
//!
//! - [`TypeRegistry`]: holds, per [`Capability`], each element's
//! 	[`TypeDescriptor`] (parameters, port patterns, slots, statistics) and its
//! 	builder. Libraries fill it through a [`LibraryBuilder`].
//!
//! - [`Factory`]: loads each library at most once, resolves descriptors and
//! 	builders, scopes the [`Params`] to the declared parameter names and invokes
//! 	the builder. One reentrant lock serializes all of it; builders may call
//! 	back into the factory on the same thread.
//!
//! - [`port_pattern`]: the small pattern language components use to declare
//! 	numbered port banks (`port%d`, `bank%(bank)d`, `*`).
//!
//! # Failure Policy
//!
//! A type that cannot be resolved is a configuration defect. The `create_*`
//! methods hand such failures to the factory's [`DiagnosticSink`], which never
//! returns; by default it logs and exits the process. Each has a `try_create_*`
//! twin returning [`FactoryError`] for callers that want to decide themselves.
//!
//! # Example
//!
//! ```
//! use element_factory::{
//! 	Factory, StaticLoader, TypeDescriptor, StatisticInfo, Params, LinkMap,
//! 	ComponentId, Component, SubComponent, PanicOnFatal,
//! };
//!
//! struct Cpu { cache: Box<dyn SubComponent> }
//! impl Component for Cpu {}
//!
//! struct Cache { lines: u32 }
//! impl SubComponent for Cache {}
//!
//! let loader = StaticLoader::new().with_library( "proc", | library | {
//! 	library
//! 		.component(
//! 			"cpu",
//! 			TypeDescriptor::new( "A processor" )
//! 				.with_params([ "clock" ])
//! 				.with_ports([ "mem%d" ])
//! 				.with_slot( "cache", "First-level cache" )
//! 				.with_statistic( StatisticInfo::new( "cycles", 1, "count" )),
//! 			| factory, id, params | {
//! 				// Builders re-enter the factory to build their sub-components.
//! 				let cache = factory.create_sub_component( "proc.cache", id, params );
//! 				Box::new( Cpu { cache })
//! 			},
//! 		)
//! 		.sub_component(
//! 			"cache",
//! 			TypeDescriptor::new( "A cache" ).with_params([ "lines" ]),
//! 			| _factory, _owner, params | Box::new( Cache {
//! 				lines: params.find_parsed( "lines" ).unwrap_or( 64 ),
//! 			}),
//! 		);
//! });
//!
//! let factory = Factory::new( "", loader ).with_diagnostics( PanicOnFatal );
//!
//! let id = ComponentId::new( 0 );
//! let mut params = Params::new().with( "clock", "2GHz" ).with( "lines", "128" );
//! let mut links = LinkMap::new( id );
//! let cpu = factory.create_component( id, "proc.cpu", &mut params, &mut links );
//!
//! assert!( links.is_port_allowed( "mem3" ));
//! assert!( !links.is_port_allowed( "io0" ));
//! assert_eq!( factory.statistic_enable_level( "proc.cpu", "cycles" ), 1 );
//! assert_eq!( params.scope_depth(), 0 );
//!
//! let cpu = ( &*cpu as &dyn std::any::Any ).downcast_ref::<Cpu>().unwrap();
//! let cache = ( &*cpu.cache as &dyn std::any::Any ).downcast_ref::<Cache>().unwrap();
//! assert_eq!( cache.lines, 128 );
//! ```

mod capability ;
mod descriptor ;
mod diagnostics ;
mod factory ;
mod link_map ;
mod loader ;
mod params ;
mod qualified_name ;
mod registry ;
pub mod port_pattern ;

pub use capability::{
	Capability, ComponentId, RankInfo, BuilderEntry,
	Component, SubComponent, Module, Partitioner, ScriptingBridge,
	ComponentBuilder, SubComponentBuilder, ModuleBuilder, ModuleWithComponentBuilder,
	PartitionerBuilder, ScriptingBridgeBuilder,
};
pub use descriptor::{ TypeDescriptor, SlotInfo, StatisticInfo };
pub use diagnostics::{ FactoryError, DiagnosticSink, ExitOnFatal, PanicOnFatal };
pub use factory::Factory ;
pub use link_map::{ LinkMap, LinkError };
pub use loader::{ LibraryLoader, StaticLoader, SearchPaths };
pub use params::{ Params, ScopedParams };
pub use port_pattern::PortPattern ;
pub use qualified_name::QualifiedName ;
pub use registry::{ TypeRegistry, LibraryBuilder, RegistrationError, BUILTIN_LIBRARY };
