//! Read-only queries against element descriptors.
//!
//! Each query loads the type's library, resolves the descriptor and treats an
//! unknown type as fatal. An empty type name stands for the component currently
//! being constructed, which lets a component's builder ask about its own
//! statistics without knowing the name it was registered under.

use std::sync::Arc ;

use crate::{ Factory, QualifiedName };
use crate::capability::Capability ;
use crate::descriptor::TypeDescriptor ;
use crate::diagnostics::FactoryError ;

impl Factory {

	/// Returns `true` if component type `type_name` declares statistic `statistic`.
	pub fn does_component_statistic_exist( &self, type_name: &str, statistic: &str ) -> bool {
		self.or_fatal( self.try_describe( type_name, statistic, &[ Capability::Component ] )
			.map(| descriptor | descriptor.statistic( statistic ).is_some() ))
	}

	/// Returns `true` if sub-component type `type_name` declares statistic `statistic`.
	pub fn does_sub_component_statistic_exist( &self, type_name: &str, statistic: &str ) -> bool {
		self.or_fatal( self.try_describe( type_name, statistic, &[ Capability::SubComponent ] )
			.map(| descriptor | descriptor.statistic( statistic ).is_some() ))
	}

	/// Enable level declared for `statistic` on `type_name`, looked up as a
	/// component and then as a sub-component. An undeclared statistic has level 0.
	pub fn statistic_enable_level( &self, type_name: &str, statistic: &str ) -> u8 {
		self.or_fatal( self.try_statistic_enable_level( type_name, statistic ))
	}

	/// [`statistic_enable_level`]( Self::statistic_enable_level ) returning the error instead.
	///
	/// # Errors
	/// Fails if the type cannot be resolved.
	pub fn try_statistic_enable_level( &self, type_name: &str, statistic: &str ) -> Result<u8, FactoryError> {
		self.try_describe( type_name, statistic, &[ Capability::Component, Capability::SubComponent ] )
			.map(| descriptor | descriptor.statistic( statistic ).map_or( 0, | info | info.enable_level() ))
	}

	/// Units declared for `statistic` on `type_name`, looked up as a component
	/// and then as a sub-component. An undeclared statistic has no units.
	pub fn statistic_units( &self, type_name: &str, statistic: &str ) -> String {
		self.or_fatal( self.try_describe( type_name, statistic, &[ Capability::Component, Capability::SubComponent ] )
			.map(| descriptor | descriptor.statistic( statistic ).map( | info | info.units().to_string() ).unwrap_or_default() ))
	}

	/// Returns `true` if `type_name` (a component or sub-component) declares slot `slot`.
	pub fn does_sub_component_slot_exist( &self, type_name: &str, slot: &str ) -> bool {
		self.or_fatal( self.try_describe( type_name, slot, &[ Capability::Component, Capability::SubComponent ] )
			.map(| descriptor | descriptor.has_slot( slot )))
	}

	/// Returns `true` if `port` matches one of the port patterns of `type_name`
	/// (a component or sub-component).
	pub fn is_port_name_valid( &self, type_name: &str, port: &str ) -> bool {
		self.or_fatal( self.try_describe( type_name, port, &[ Capability::Component, Capability::SubComponent ] )
			.map(| descriptor | descriptor.accepts_port( port )))
	}

	/// Resolves the descriptor of `type_name` in the first of `capabilities`
	/// that knows it.
	///
	/// `query` names what is being asked about and only feeds diagnostics.
	///
	/// # Errors
	/// Fails if the library does not load, if no table knows the type, or if the
	/// type name is empty outside of component construction.
	pub fn try_describe(
		&self,
		type_name: &str,
		query: &str,
		capabilities: &[Capability],
	) -> Result<Arc<TypeDescriptor>, FactoryError> {

		let name = self.query_target( type_name, query )?;
		self.try_require_library( name.library() )?;

		let _state = self.lock();
		capabilities.iter()
			.find_map(| &capability | self.registry.descriptor( capability, name.library(), name.element() ))
			.ok_or_else(|| self.element_not_found( capabilities.first().copied().unwrap_or( Capability::Component ), &name ))

	}

	/// The type a query is about: `type_name`, or the innermost component under
	/// construction when `type_name` is empty.
	fn query_target( &self, type_name: &str, query: &str ) -> Result<QualifiedName, FactoryError> {
		if !type_name.is_empty() { return Ok( QualifiedName::parse( type_name )) }
		let state = self.lock();
		let current = state.borrow().constructing.last().cloned();
		current.ok_or_else(|| FactoryError::NoTypeUnderConstruction { query: query.to_string() })
	}

	fn or_fatal<T>( &self, result: Result<T, FactoryError> ) -> T {
		result.unwrap_or_else(| error | self.fatal( &error ))
	}

}
