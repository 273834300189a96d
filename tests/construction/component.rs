use element_factory::{ ComponentId, LinkMap, LinkError, Params };

use crate::fixtures::{ self, Core, Cache, Leaf };

#[test]
fn component_is_built_with_its_parameters() {

	let ( factory, calls ) = fixtures::factory();
	let id = ComponentId::new( 7 );
	let mut params = Params::new().with( "clock", "1GHz" ).with( "lines", "256" );
	let mut links = LinkMap::new( id );

	let core = factory.create_component( id, "fixture.core", &mut params, &mut links );
	let core = fixtures::downcast::<Core>( &*core );

	assert_eq!( core.id, id );
	assert_eq!( core.clock.as_deref(), Some( "1GHz" ));
	assert!( core.clock_declared );
	assert!( !core.lines_declared );
	assert_eq!( core.scope_depth, 1 );
	assert_eq!( fixtures::calls( &calls ), 1 );

	let cache = fixtures::downcast::<Cache>( &*core.cache );
	assert_eq!( cache.owner, id );
	assert_eq!( cache.lines, Some( 256 ));

}

#[test]
fn component_ports_are_installed_before_use() {

	let ( factory, _ ) = fixtures::factory();
	let id = ComponentId::new( 1 );
	let mut links = LinkMap::new( id );
	assert!( links.is_port_allowed( "anything" ));

	factory.create_component( id, "fixture.core", &mut Params::new(), &mut links );

	assert!( links.is_port_allowed( "port0" ));
	assert!( links.is_port_allowed( "bank2_port11" ));
	assert!( links.is_port_allowed( "ctrl" ));
	assert!( !links.is_port_allowed( "data" ));

	assert_eq!( links.insert_link( "port3", "link_a" ), Ok(()));
	assert_eq!( links.link( "port3" ), Some( "link_a" ));
	assert_eq!(
		links.insert_link( "port3", "link_b" ),
		Err( LinkError::AlreadyConnected { component: id, port: "port3".to_string() }),
	);
	assert_eq!(
		links.insert_link( "data", "link_c" ),
		Err( LinkError::InvalidPort { component: id, port: "data".to_string() }),
	);

}

#[test]
fn wildcard_component_accepts_every_port() {
	let ( factory, _ ) = fixtures::factory();
	let id = ComponentId::new( 2 );
	let mut links = LinkMap::new( id );
	let leaf = factory.create_component( id, "fixture.leaf", &mut Params::new(), &mut links );
	assert_eq!( fixtures::downcast::<Leaf>( &*leaf ).id, id );
	assert!( links.is_port_allowed( "" ));
	assert!( links.is_port_allowed( "whatever_9" ));
}
