mod field_enumerable;
