use std::sync::Arc ;

use crate::{ Factory, QualifiedName };
use crate::capability::*;
use crate::descriptor::TypeDescriptor ;
use crate::diagnostics::FactoryError ;
use crate::link_map::LinkMap ;
use crate::params::Params ;
use super::Constructing ;

impl Factory {

	/// Builds a component of type `type_name`.
	///
	/// The type's port patterns are installed into `link_map` and its declared
	/// parameters scope `params` for the duration of the build. While the builder
	/// runs, statistic queries with an empty type name resolve to this type.
	///
	/// Any resolution failure is fatal.
	pub fn create_component(
		&self,
		id: ComponentId,
		type_name: &str,
		params: &mut Params,
		link_map: &mut LinkMap,
	) -> Box<dyn Component> {
		self.try_create_component( id, type_name, params, link_map )
			.unwrap_or_else(| error | self.fatal( &error ))
	}

	/// [`create_component`]( Self::create_component ) returning the error instead.
	///
	/// # Errors
	/// Fails if the library does not load or does not register the component.
	pub fn try_create_component(
		&self,
		id: ComponentId,
		type_name: &str,
		params: &mut Params,
		link_map: &mut LinkMap,
	) -> Result<Box<dyn Component>, FactoryError> {

		debug_assert_eq!( link_map.component(), id, "link map belongs to a different component" );

		let name = QualifiedName::parse( type_name );
		self.try_require_library( name.library() )?;

		let state = self.lock();
		let ( descriptor, build ) = self.resolve::<ComponentBuilder>( &name )?;

		link_map.set_allowed_ports( Arc::clone( &descriptor ));
		tracing::debug!( component = %id, r#type = %name, "constructing component" );

		let _constructing = Constructing::enter( &state, name );
		let mut params = params.scoped( descriptor.params().clone() );
		Ok( build( self, id, &mut *params ))

	}

	/// Builds a sub-component of type `type_name` owned by component `owner`.
	pub fn create_sub_component( &self, type_name: &str, owner: ComponentId, params: &mut Params ) -> Box<dyn SubComponent> {
		self.try_create_sub_component( type_name, owner, params )
			.unwrap_or_else(| error | self.fatal( &error ))
	}

	/// [`create_sub_component`]( Self::create_sub_component ) returning the error instead.
	///
	/// # Errors
	/// Fails if the library does not load or does not register the sub-component.
	pub fn try_create_sub_component(
		&self,
		type_name: &str,
		owner: ComponentId,
		params: &mut Params,
	) -> Result<Box<dyn SubComponent>, FactoryError> {
		self.construct( type_name, | descriptor, build: SubComponentBuilder | {
			let mut params = params.scoped( descriptor.params().clone() );
			build( self, owner, &mut *params )
		})
	}

	/// Builds a module of type `type_name` from parameters alone.
	///
	/// An empty type name is fatal, since it almost always means the module
	/// string is missing from the configuration.
	pub fn create_module( &self, type_name: &str, params: &mut Params ) -> Box<dyn Module> {
		self.try_create_module( type_name, params )
			.unwrap_or_else(| error | self.fatal( &error ))
	}

	/// [`create_module`]( Self::create_module ) returning the error instead.
	///
	/// # Errors
	/// Fails on an empty type name, or if the library does not load or does not
	/// register the module.
	pub fn try_create_module( &self, type_name: &str, params: &mut Params ) -> Result<Box<dyn Module>, FactoryError> {
		if type_name.is_empty() { return Err( FactoryError::EmptyModuleName ) }
		self.construct( type_name, | descriptor, build: ModuleBuilder | {
			let mut params = params.scoped( descriptor.params().clone() );
			build( self, &mut *params )
		})
	}

	/// Builds a module of type `type_name` bound to component `owner`.
	pub fn create_module_with_component( &self, type_name: &str, owner: ComponentId, params: &mut Params ) -> Box<dyn Module> {
		self.try_create_module_with_component( type_name, owner, params )
			.unwrap_or_else(| error | self.fatal( &error ))
	}

	/// [`create_module_with_component`]( Self::create_module_with_component ) returning the error instead.
	///
	/// # Errors
	/// Fails if the library does not load, or registers no component-bound
	/// builder for the module.
	pub fn try_create_module_with_component(
		&self,
		type_name: &str,
		owner: ComponentId,
		params: &mut Params,
	) -> Result<Box<dyn Module>, FactoryError> {
		self.construct( type_name, | descriptor, build: ModuleWithComponentBuilder | {
			let mut params = params.scoped( descriptor.params().clone() );
			build( self, owner, &mut *params )
		})
	}

	/// Builds partitioner `name` for rank `my_rank` out of `total_ranks`.
	pub fn create_partitioner( &self, name: &str, total_ranks: RankInfo, my_rank: RankInfo, verbosity: u32 ) -> Box<dyn Partitioner> {
		self.try_create_partitioner( name, total_ranks, my_rank, verbosity )
			.unwrap_or_else(| error | self.fatal( &error ))
	}

	/// [`create_partitioner`]( Self::create_partitioner ) returning the error instead.
	///
	/// # Errors
	/// Fails if the library does not load or does not register the partitioner.
	pub fn try_create_partitioner(
		&self,
		name: &str,
		total_ranks: RankInfo,
		my_rank: RankInfo,
		verbosity: u32,
	) -> Result<Box<dyn Partitioner>, FactoryError> {
		self.construct( name, | _, build: PartitionerBuilder | build( self, total_ranks, my_rank, verbosity ))
	}

	/// Returns the scripting bridge of the library named by `name`, if it has one.
	///
	/// Only the library part of `name` is used; a library has at most one bridge.
	/// This is a probe: a missing library or bridge yields `None` and nothing is
	/// reported.
	pub fn get_scripting_bridge( &self, name: &str ) -> Option<Box<dyn ScriptingBridge>> {

		let library = QualifiedName::parse( name ).into_parts().0 ;
		if !self.find_library( &library, false ) { return None }

		let _state = self.lock();
		let bridge = QualifiedName::new( library.as_str(), library.as_str() );
		let ( _, build ) = self.resolve::<ScriptingBridgeBuilder>( &bridge ).ok()?;
		tracing::debug!( library = %library, "constructing scripting bridge" );
		Some( build( library.as_str() ))

	}

	/// Runs the construction protocol shared by the non-component entry points.
	///
	/// Parses `type_name`, requires its library, then resolves and calls `build`
	/// with the factory lock held throughout.
	fn construct<B, T>(
		&self,
		type_name: &str,
		build: impl FnOnce( &TypeDescriptor, B ) -> T,
	) -> Result<T, FactoryError>
	where
		B: BuilderKind,
	{
		let name = QualifiedName::parse( type_name );
		self.try_require_library( name.library() )?;
		let _state = self.lock();
		let ( descriptor, builder ) = self.resolve::<B>( &name )?;
		tracing::debug!( capability = %B::CAPABILITY, r#type = %name, "constructing element" );
		Ok( build( &descriptor, builder ))
	}

	/// Resolves the descriptor and builder of `name` for `B`'s capability.
	///
	/// Call with the factory lock held.
	pub(super) fn resolve<B: BuilderKind>( &self, name: &QualifiedName ) -> Result<( Arc<TypeDescriptor>, B ), FactoryError> {

		let capability = B::CAPABILITY ;
		let descriptor = self.registry
			.descriptor( capability, name.library(), name.element() )
			.ok_or_else(|| self.element_not_found( capability, name ))?;
		let builder = self.registry
			.builder( capability, name.library(), name.element() )
			.and_then( B::from_entry )
			.ok_or_else(|| FactoryError::BuilderNotFound { capability, name: name.clone() })?;

		Ok(( descriptor, builder ))

	}

	/// Builds the not-found error for `name`, listing what the library does offer.
	pub(super) fn element_not_found( &self, capability: Capability, name: &QualifiedName ) -> FactoryError {
		FactoryError::ElementNotFound {
			capability,
			name: name.clone(),
			alternatives: self.registry.elements( capability, name.library() ),
			sibling: capability.sibling()
				.map(| sibling | ( sibling, self.registry.elements( sibling, name.library() ))),
		}
	}

}
