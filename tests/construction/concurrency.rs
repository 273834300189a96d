use std::sync::Arc ;
use std::sync::atomic::{ AtomicUsize, Ordering };
use std::time::Duration ;
use element_factory::{ Component, ComponentId, Factory, LinkMap, Params, PanicOnFatal, StaticLoader, TypeDescriptor };

use crate::fixtures ;

struct Slow ;
impl Component for Slow {}

#[test]
fn construction_is_serialized_across_threads() {

	let active = Arc::new( AtomicUsize::new( 0 ));
	let overlaps = Arc::new( AtomicUsize::new( 0 ));
	let built = Arc::new( AtomicUsize::new( 0 ));

	let loader = {
		let ( active, overlaps, built ) = ( Arc::clone( &active ), Arc::clone( &overlaps ), Arc::clone( &built ));
		StaticLoader::new().with_library( "slow", move | library | {
			let ( active, overlaps, built ) = ( Arc::clone( &active ), Arc::clone( &overlaps ), Arc::clone( &built ));
			library.component( "part", TypeDescriptor::new( "Takes its time" ), move | _, _, _ | {
				if active.fetch_add( 1, Ordering::SeqCst ) != 0 { overlaps.fetch_add( 1, Ordering::SeqCst ); }
				std::thread::sleep( Duration::from_millis( 2 ));
				active.fetch_sub( 1, Ordering::SeqCst );
				built.fetch_add( 1, Ordering::SeqCst );
				Box::new( Slow )
			});
		})
	};

	let ( factory, calls ) = fixtures::factory_with( loader );
	let factory = Arc::new( factory );

	let threads = ( 0..4_u64 ).map(| thread | {
		let factory = Arc::clone( &factory );
		std::thread::spawn( move || {
			for index in 0..10_u64 {
				let id = ComponentId::new( thread * 100 + index );
				factory.create_component( id, "slow.part", &mut Params::new(), &mut LinkMap::new( id ));
			}
		})
	}).collect::<Vec<_>>();

	threads.into_iter().for_each(| thread | thread.join().expect( "construction thread panicked" ));

	assert_eq!( built.load( Ordering::SeqCst ), 40 );
	assert_eq!( overlaps.load( Ordering::SeqCst ), 0 );
	assert_eq!( fixtures::calls( &calls ), 1 );

}

#[test]
fn factory_is_shareable_between_threads() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<Factory>();
	let _ = Factory::new( "", StaticLoader::new() ).with_diagnostics( PanicOnFatal );
}
