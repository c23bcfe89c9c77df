flat_mod!(flags, object);
