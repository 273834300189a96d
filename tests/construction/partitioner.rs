use element_factory::{ FactoryError, RankInfo };

use crate::fixtures::{ self, Linear };

#[test]
fn partitioner_receives_rank_information() {
	let ( factory, _ ) = fixtures::factory();
	let total = RankInfo::new( 4, 2 );
	let me = RankInfo::new( 1, 0 );
	let partitioner = factory.create_partitioner( "fixture.linear", total, me, 3 );
	let partitioner = fixtures::downcast::<Linear>( &*partitioner );
	assert_eq!( partitioner.total, total );
	assert_eq!( partitioner.me, me );
	assert_eq!( partitioner.verbosity, 3 );
}

#[test]
fn unknown_partitioner_mentions_help() {
	let ( factory, _ ) = fixtures::factory();
	let error = factory
		.try_create_partitioner( "fixture.zoltan", RankInfo::default(), RankInfo::default(), 0 )
		.err()
		.expect( "Expected failure" );
	assert!( matches!( error, FactoryError::ElementNotFound { .. }));
	let message = error.to_string();
	assert!( message.contains( "check --help for information on partitioners" ), "{}", message );
	assert!( message.contains( "linear" ), "{}", message );
}
