use element_factory::{ ComponentId, LinkMap, Params };

use crate::fixtures::{ self, Core, Cache, Leaf, Wrapper };

#[test]
fn builder_constructs_its_own_sub_components() {
	let ( factory, _ ) = fixtures::factory();
	let id = ComponentId::new( 30 );
	let core = factory.create_component( id, "fixture.core", &mut Params::new(), &mut LinkMap::new( id ));
	let cache = fixtures::downcast::<Cache>( &*fixtures::downcast::<Core>( &*core ).cache );
	assert_eq!( cache.owner, id );
	assert_eq!( cache.scope_depth, 2 );
}

#[test]
fn builder_constructs_another_component() {

	let ( factory, _ ) = fixtures::factory();
	let id = ComponentId::new( 40 );

	let wrapper = factory.create_component( id, "fixture.wrapper", &mut Params::new(), &mut LinkMap::new( id ));
	let wrapper = fixtures::downcast::<Wrapper>( &*wrapper );
	let leaf = fixtures::downcast::<Leaf>( &*wrapper.inner );

	assert!( wrapper.before );
	assert!( wrapper.after );
	assert!( leaf.has_own_statistic );
	assert_eq!( leaf.id, ComponentId::new( 41 ));
	assert!( wrapper.inner_links.is_port_allowed( "any_port" ));

}

#[test]
fn sub_component_type_can_be_chosen_by_parameter() {
	let ( factory, _ ) = fixtures::factory();
	let id = ComponentId::new( 50 );
	let mut params = Params::new().with( "cache", "fixture.cache" ).with( "lines", "8" );
	let core = factory.create_component( id, "fixture.core", &mut params, &mut LinkMap::new( id ));
	let cache = fixtures::downcast::<Cache>( &*fixtures::downcast::<Core>( &*core ).cache );
	assert_eq!( cache.lines, Some( 8 ));
}
