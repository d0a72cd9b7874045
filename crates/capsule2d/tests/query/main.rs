mod point_segment_shape;
mod vertex_lookup;
