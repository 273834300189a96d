//! Per-component port bookkeeping.

use std::collections::BTreeMap ;
use std::sync::Arc ;
use thiserror::Error ;

use crate::capability::ComponentId ;
use crate::descriptor::TypeDescriptor ;

/// Errors raised when connecting a port on a component.
#[derive( Debug, Error, Clone, PartialEq, Eq )]
pub enum LinkError {
	/// The port name matches none of the component type's port patterns.
	#[error( "port '{port}' is not valid for component {component}" )]
	InvalidPort { component: ComponentId, port: String },
	#[error( "port '{port}' of component {component} is already connected" )]
	AlreadyConnected { component: ComponentId, port: String },
}

/// The ports of one component instance and the links attached to them.
///
/// The factory installs the component type's declared port patterns before the
/// component's builder runs, so that ports the builder configures are checked
/// against the type.
#[derive( Debug, Clone )]
pub struct LinkMap {
	component: ComponentId,
	allowed: Option<Arc<TypeDescriptor>>,
	links: BTreeMap<String, String>,
}

impl LinkMap {

	pub fn new( component: ComponentId ) -> Self {
		Self { component, allowed: None, links: BTreeMap::new() }
	}

	#[inline] pub fn component( &self ) -> ComponentId { self.component }

	/// Restricts port names to those matched by `descriptor`'s port patterns.
	pub fn set_allowed_ports( &mut self, descriptor: Arc<TypeDescriptor> ) {
		self.allowed = Some( descriptor );
	}

	/// Returns `true` if `port` may be used on this component.
	///
	/// Before patterns are installed every name is accepted.
	pub fn is_port_allowed( &self, port: &str ) -> bool {
		self.allowed.as_ref().is_none_or(| descriptor | descriptor.accepts_port( port ))
	}

	/// Attaches link `link` to `port`.
	///
	/// # Errors
	/// Fails if the port is not allowed or already has a link.
	pub fn insert_link( &mut self, port: impl Into<String>, link: impl Into<String> ) -> Result<(), LinkError> {
		let port = port.into();
		if !self.is_port_allowed( &port ) {
			return Err( LinkError::InvalidPort { component: self.component, port })
		}
		if self.links.contains_key( &port ) {
			return Err( LinkError::AlreadyConnected { component: self.component, port })
		}
		self.links.insert( port, link.into() );
		Ok(())
	}

	/// Name of the link attached to `port`.
	pub fn link( &self, port: &str ) -> Option<&str> { self.links.get( port ).map( String::as_str ) }

	pub fn is_empty( &self ) -> bool { self.links.is_empty() }

}
