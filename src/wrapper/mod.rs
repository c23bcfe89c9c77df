flat_mod!(variant, base, container, registry);
