use crate::core::library::LibraryResult;

pub trait Repository<Key, Entity> {
    // create an entity and return the key it is stored under
    fn create(&mut self, entity: Entity) -> LibraryResult<Key>;

    // get an entity
    fn get(&self, key: &Key) -> Option<&Entity>;

    // get an entity for in-place changes
    fn get_mut(&mut self, key: &Key) -> Option<&mut Entity>;

    // number of stored entities
    fn count(&self) -> usize;
}
